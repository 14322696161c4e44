//! Fight tuning resource.
//!
//! Holds every balance number used by the blender and the combat rules,
//! loaded from an INI file. Defaults are the shipped balance, so a missing
//! file or key is never fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [animation]
//! min_speed = 30
//! max_speed = 81
//! block_time = 20
//! block_speed_percentage = 0.9
//!
//! [combat]
//! health = 600
//! min_strength = 10
//! max_strength = 81
//! min_block = 30
//! max_block = 121
//! min_stun = 0.75
//! max_stun = 2.0
//! knockback = 500
//! block_knockback = 80
//! mass = 1.0
//! airborne_threshold = 0.001
//!
//! [shield]
//! min_scale = 0.25
//! max_scale = 1.0
//!
//! [match]
//! intro_freeze = 2.0
//!
//! [library]
//! path = ./moves.json
//! ```

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};

use crate::error::{FightError, Result};
use crate::moves::blender::BlendParams;

const DEFAULT_HEALTH: i32 = 600;
const DEFAULT_MIN_STRENGTH: f32 = 10.0;
const DEFAULT_MAX_STRENGTH: f32 = 81.0;
const DEFAULT_MIN_BLOCK: f32 = 30.0;
const DEFAULT_MAX_BLOCK: f32 = 121.0;
const DEFAULT_MIN_STUN: f32 = 0.75;
const DEFAULT_MAX_STUN: f32 = 2.0;
const DEFAULT_KNOCKBACK: f32 = 500.0;
const DEFAULT_BLOCK_KNOCKBACK: f32 = 80.0;
const DEFAULT_MASS: f32 = 1.0;
const DEFAULT_AIRBORNE_THRESHOLD: f32 = 0.001;
const DEFAULT_MIN_SHIELD_SCALE: f32 = 0.25;
const DEFAULT_MAX_SHIELD_SCALE: f32 = 1.0;
const DEFAULT_INTRO_FREEZE: f32 = 2.0;
const DEFAULT_LIBRARY_PATH: &str = "./moves.json";
const DEFAULT_CONFIG_PATH: &str = "./fight.ini";

/// Map a 0..=100 stat linearly onto `[min, max]`.
pub fn scale_stat(stat: u8, min: f32, max: f32) -> f32 {
    min + f32::from(stat) / 100.0 * (max - min)
}

/// Fight tuning resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FightConfig {
    /// Blender tunables (`[animation]`).
    pub blend: BlendParams,
    /// Starting and maximum health of both fighters.
    pub health: i32,
    pub min_strength: f32,
    pub max_strength: f32,
    pub min_block: f32,
    pub max_block: f32,
    /// Attacker stun after a blocked hit, in seconds.
    pub min_stun: f32,
    pub max_stun: f32,
    /// Impulse of an unblocked hit.
    pub knockback: f32,
    /// Impulse of a blocked hit.
    pub block_knockback: f32,
    /// Fighter mass hits are divided by.
    pub mass: f32,
    /// Vertical speed above which a fighter counts as airborne.
    pub airborne_threshold: f32,
    pub min_shield_scale: f32,
    pub max_shield_scale: f32,
    /// Seconds both fighters are frozen at match start.
    pub intro_freeze: f32,
    /// Move library file.
    pub library_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FightConfig {
    /// Create a configuration with the shipped balance.
    pub fn new() -> Self {
        Self {
            blend: BlendParams::default(),
            health: DEFAULT_HEALTH,
            min_strength: DEFAULT_MIN_STRENGTH,
            max_strength: DEFAULT_MAX_STRENGTH,
            min_block: DEFAULT_MIN_BLOCK,
            max_block: DEFAULT_MAX_BLOCK,
            min_stun: DEFAULT_MIN_STUN,
            max_stun: DEFAULT_MAX_STUN,
            knockback: DEFAULT_KNOCKBACK,
            block_knockback: DEFAULT_BLOCK_KNOCKBACK,
            mass: DEFAULT_MASS,
            airborne_threshold: DEFAULT_AIRBORNE_THRESHOLD,
            min_shield_scale: DEFAULT_MIN_SHIELD_SCALE,
            max_shield_scale: DEFAULT_MAX_SHIELD_SCALE,
            intro_freeze: DEFAULT_INTRO_FREEZE,
            library_path: PathBuf::from(DEFAULT_LIBRARY_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from `config_path`.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| FightError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply(&ini);
        info!("Loaded fight config from {:?}", self.config_path);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| FightError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply(&ini);
        Ok(())
    }

    fn apply(&mut self, ini: &Ini) {
        let float = |section: &str, key: &str| ini.getfloat(section, key).ok().flatten().map(|v| v as f32);
        let uint = |section: &str, key: &str| ini.getuint(section, key).ok().flatten();

        // [animation] section
        if let Some(v) = uint("animation", "min_speed") {
            self.blend.min_speed = v as u32;
        }
        if let Some(v) = uint("animation", "max_speed") {
            self.blend.max_speed = v as u32;
        }
        if let Some(v) = uint("animation", "block_time") {
            self.blend.block_time = v as usize;
        }
        if let Some(v) = float("animation", "block_speed_percentage") {
            self.blend.block_speed_percentage = v.clamp(0.0, 1.0);
        }

        // [combat] section
        if let Some(v) = ini.getint("combat", "health").ok().flatten() {
            self.health = v as i32;
        }
        for (key, field) in [
            ("min_strength", &mut self.min_strength),
            ("max_strength", &mut self.max_strength),
            ("min_block", &mut self.min_block),
            ("max_block", &mut self.max_block),
            ("min_stun", &mut self.min_stun),
            ("max_stun", &mut self.max_stun),
            ("knockback", &mut self.knockback),
            ("block_knockback", &mut self.block_knockback),
            ("airborne_threshold", &mut self.airborne_threshold),
        ] {
            if let Some(v) = float("combat", key) {
                *field = v;
            }
        }
        if let Some(v) = float("combat", "mass") {
            if v > 0.0 {
                self.mass = v;
            } else {
                warn!("Ignoring non-positive mass {}", v);
            }
        }

        // [shield] section
        if let Some(v) = float("shield", "min_scale") {
            self.min_shield_scale = v;
        }
        if let Some(v) = float("shield", "max_scale") {
            self.max_shield_scale = v;
        }

        // [match] section
        if let Some(v) = float("match", "intro_freeze") {
            self.intro_freeze = v.max(0.0);
        }

        // [library] section
        if let Some(path) = ini.get("library", "path") {
            self.library_path = PathBuf::from(path);
        }
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            ini.set(section, key, Some(value));
        };

        set("animation", "min_speed", self.blend.min_speed.to_string());
        set("animation", "max_speed", self.blend.max_speed.to_string());
        set("animation", "block_time", self.blend.block_time.to_string());
        set(
            "animation",
            "block_speed_percentage",
            self.blend.block_speed_percentage.to_string(),
        );

        set("combat", "health", self.health.to_string());
        set("combat", "min_strength", self.min_strength.to_string());
        set("combat", "max_strength", self.max_strength.to_string());
        set("combat", "min_block", self.min_block.to_string());
        set("combat", "max_block", self.max_block.to_string());
        set("combat", "min_stun", self.min_stun.to_string());
        set("combat", "max_stun", self.max_stun.to_string());
        set("combat", "knockback", self.knockback.to_string());
        set("combat", "block_knockback", self.block_knockback.to_string());
        set("combat", "mass", self.mass.to_string());
        set("combat", "airborne_threshold", self.airborne_threshold.to_string());

        set("shield", "min_scale", self.min_shield_scale.to_string());
        set("shield", "max_scale", self.max_shield_scale.to_string());

        set("match", "intro_freeze", self.intro_freeze.to_string());

        set("library", "path", self.library_path.display().to_string());
        ini
    }

    /// Save configuration to `config_path`, creating the file if needed.
    pub fn save_to_file(&self) -> Result<()> {
        self.save_to_path(&self.config_path)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_ini().write(path)?;
        info!("Saved fight config to {:?}", path);
        Ok(())
    }

    /// Configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Raw damage of an attack with the given strength stat.
    pub fn strength_effect(&self, strength: u8) -> f32 {
        scale_stat(strength, self.min_strength, self.max_strength)
    }

    /// Damage absorbed by a block move with the given speed stat.
    pub fn block_effect(&self, speed: u8) -> f32 {
        scale_stat(speed, self.min_block, self.max_block)
    }

    /// Seconds an attacker is stunned after being blocked.
    pub fn stun_time(&self, strength: u8) -> f32 {
        scale_stat(strength, self.min_stun, self.max_stun)
    }

    /// Shield size of a block move with the given strength stat.
    pub fn shield_scale(&self, strength: u8) -> f32 {
        scale_stat(strength, self.min_shield_scale, self.max_shield_scale)
    }
}
