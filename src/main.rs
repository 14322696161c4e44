//! Stickbrawl command line entry point.
//!
//! A headless front end to the fight core:
//! - **bevy_ecs** runs the match world
//! - **configparser** reads the balance file
//! - **serde_json** stores the move library
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- list
//! cargo run --release -- expand Jab
//! cargo run --release -- demo --ticks 900
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info, warn};

use stickbrawl::components::moveplayer::PlaybackState;
use stickbrawl::error::Result;
use stickbrawl::events::hit::Collider;
use stickbrawl::game::FightSession;
use stickbrawl::moves::blender::{expand_move, tick_step};
use stickbrawl::moves::bodypart::BodyPart;
use stickbrawl::moves::fightmove::Move;
use stickbrawl::moves::pose::Pose;
use stickbrawl::moves::recorder::Recorder;
use stickbrawl::resources::fightconfig::FightConfig;
use stickbrawl::resources::movelibrary::MoveLibrary;

/// Stickbrawl headless fight engine
#[derive(Parser)]
#[command(version, about = "Keyframe stick-figure fight engine, headless edition.")]
struct Cli {
    /// Balance file (INI).
    #[arg(long, value_name = "PATH", default_value = "./fight.ini")]
    config: PathBuf,

    /// Move library file; overrides `[library] path` from the config.
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the moves in the library.
    List,
    /// Show the dense pose sequence a move expands to.
    Expand {
        /// Move name.
        name: String,
    },
    /// Run a scripted match between two fighters.
    Demo {
        /// Number of frames to simulate.
        #[arg(long, default_value_t = 900)]
        ticks: u32,
        /// Seconds per frame.
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
    },
    /// Write the current configuration to the config path.
    WriteConfig,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = FightConfig::with_path(cli.config.clone());
    if cli.config.exists() {
        config.load_from_file()?;
    } else {
        warn!("Config {:?} not found, using defaults", cli.config);
    }
    if let Some(path) = cli.library {
        config.library_path = path;
    }

    let mut library = MoveLibrary::new();
    library.load_from_file(&config.library_path)?;

    match cli.command {
        Command::List => list(&library),
        Command::Expand { name } => expand(&library, &config, &name),
        Command::Demo { ticks, dt } => demo(library, config, ticks, dt),
        Command::WriteConfig => config.save_to_file(),
    }
}

fn list(library: &MoveLibrary) -> Result<()> {
    if library.is_empty() {
        println!("(library is empty)");
    }
    for m in library.moves() {
        println!(
            "{:<16} {:>2} poses  speed {:>3}  strength {:>3}  {:<6} {}",
            m.name(),
            m.count(),
            m.speed(),
            m.strength(),
            if m.is_block_move() { "block" } else { "attack" },
            m.active_part()
        );
    }
    Ok(())
}

fn expand(library: &MoveLibrary, config: &FightConfig, name: &str) -> Result<()> {
    let m = library
        .get(name)
        .ok_or_else(|| stickbrawl::error::FightError::InvalidMoveReference(name.to_string()))?;
    let sequence = expand_move(m, &config.blend);
    println!(
        "{}: {} key poses, step {}, {} ticks",
        m.name(),
        m.count(),
        tick_step(m.speed(), m.is_block_move(), &config.blend),
        sequence.len()
    );
    if let Some(last) = sequence.last() {
        for part in last.parts() {
            println!("  {:<16} {:>8.2}", part.name(), last.rotation(part));
        }
    }
    Ok(())
}

/// Record the demo moves with the editor recorder if the library lacks them.
fn ensure_demo_moves(library: &mut MoveLibrary) -> Result<()> {
    if !library.contains_name("Jab") {
        let stance = Pose::new()
            .with(BodyPart::UpperRightArm, 300.0)
            .with(BodyPart::LowerRightArm, 280.0);
        let mut recorder = Recorder::new(Move::new(""), stance);
        for step in 1..6 {
            let t = step as f32 * 18.0;
            recorder.record_pose(
                Pose::new()
                    .with(BodyPart::UpperRightArm, (300.0 + t) % 360.0)
                    .with(BodyPart::LowerRightArm, (280.0 + t * 1.2) % 360.0),
            );
        }
        recorder.set_speed(70);
        recorder.set_strength(60);
        recorder.set_active_part(BodyPart::RightHand);
        recorder.save(library, "Jab")?;
        info!("Recorded demo move 'Jab'");
    }
    if !library.contains_name("Guard") {
        let stance = Pose::new().with(BodyPart::UpperLeftArm, 200.0);
        let mut recorder = Recorder::new(Move::new(""), stance).with_reverse_on_way_back(false);
        for angle in [170.0, 140.0, 120.0, 110.0, 100.0, 95.0, 90.0, 90.0, 95.0, 100.0] {
            recorder.record_pose(Pose::new().with(BodyPart::UpperLeftArm, angle));
        }
        recorder.set_strength(80);
        recorder.set_block_move(true);
        recorder.set_active_part(BodyPart::LeftHand);
        recorder.save(library, "Guard")?;
        info!("Recorded demo move 'Guard'");
    }
    Ok(())
}

/// Collider the opponent presents: its shield while blocking, else its body.
fn defending_collider(session: &FightSession, number: u8) -> Collider {
    session
        .move_player(number)
        .and_then(|p| p.current_move())
        .filter(|m| m.is_block_move())
        .map_or(Collider::Body, |m| Collider::Shield(m.active_part()))
}

/// Attack collider of `number` if its attack is at the middle of its sequence.
fn striking_collider(session: &FightSession, number: u8) -> Option<Collider> {
    let player = session.move_player(number)?;
    let m = player.current_move()?;
    match player.state() {
        PlaybackState::Playing(pb) if !m.is_block_move() && pb.index() == pb.len() / 2 => {
            Some(Collider::Part(m.active_part()))
        }
        _ => None,
    }
}

fn demo(mut library: MoveLibrary, config: FightConfig, ticks: u32, dt: f32) -> Result<()> {
    ensure_demo_moves(&mut library)?;
    let mut session = FightSession::new(config, library);
    for fighter in [1, 2] {
        for name in ["Jab", "Guard"] {
            if let Some(button) = session.equip(fighter, name)? {
                info!("Fighter {} plays '{}' with '{}'", fighter, name, button);
            }
        }
    }

    for frame in 0..ticks {
        match frame % 90 {
            0 => session.press("u"),
            20 => session.press("i"),
            45 => session.press("r"),
            65 => session.press("t"),
            _ => {}
        }
        for (attacker, defender) in [(1, 2), (2, 1)] {
            if let Some(collider) = striking_collider(&session, attacker) {
                let target = defending_collider(&session, defender);
                session.hit(attacker, defender, collider, target);
            }
        }
        session.tick(dt);
        if session.match_state().is_over() {
            break;
        }
    }

    for report in &session.match_log().health_reports {
        println!(
            "fighter {} health {:>4} ({:>5.1}%)",
            report.fighter,
            report.health,
            report.percentage * 100.0
        );
    }
    match session.match_log().game_over {
        Some(result) => println!("Fighter {} wins", result.winner),
        None => {
            for n in [1, 2] {
                if let Some(f) = session.fighter(n) {
                    let left = session.match_log().last_percentage(n).unwrap_or(1.0);
                    println!(
                        "fighter {} ({}) ends on {} ({:.1}%)",
                        n,
                        f.color(),
                        f.health(),
                        left * 100.0
                    );
                }
            }
        }
    }
    Ok(())
}
