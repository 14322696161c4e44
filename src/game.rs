//! Simulation root for one two-player match.
//!
//! [`FightSession`] owns the ECS world, the per-tick schedule and the two
//! fighter entities. Every piece of state that used to be global (fighters,
//! move library, button bindings, match state) is a component or resource in
//! this world, so two sessions never share anything.
//!
//! # Tick order
//!
//! 1. [`update_world_time`] applies the frame delta.
//! 2. [`controls_system`] runs the intro freeze, stuns and knockback locks.
//! 3. [`move_player_system`] applies one pose per fighter.
//! 4. [`movement`] integrates velocities.
//!
//! Move requests, hits and pause toggles are observers; they run
//! synchronously when triggered between ticks.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::controls::ControlState;
use crate::components::fighter::{Fighter, FighterColor};
use crate::components::mapposition::MapPosition;
use crate::components::moveplayer::MovePlayer;
use crate::components::rigidbody::RigidBody;
use crate::components::skeleton::Skeleton;
use crate::error::{FightError, Result};
use crate::events::health::{record_game_over, record_health_changed};
use crate::events::hit::{Collider, HitEvent};
use crate::events::moverequest::{ButtonPressedEvent, MoveRequestedEvent};
use crate::events::pause::{PauseToggleEvent, pause_toggle_observer};
use crate::resources::bindings::MoveBindings;
use crate::resources::fightconfig::FightConfig;
use crate::resources::matchlog::MatchLog;
use crate::resources::matchstate::MatchState;
use crate::resources::movelibrary::MoveLibrary;
use crate::resources::worldtime::WorldTime;
use crate::systems::combat::hit_observer;
use crate::systems::controls::controls_system;
use crate::systems::moveplayer::move_player_system;
use crate::systems::movement::movement;
use crate::systems::moverequest::{button_pressed_observer, move_request_observer};
use crate::systems::time::update_world_time;

/// Friction applied to fighters so knockback dies down.
pub const FIGHTER_FRICTION: f32 = 8.0;
/// Starting x of player 1; player 2 starts mirrored.
pub const START_X: f32 = 100.0;

pub struct FightSession {
    world: World,
    schedule: Schedule,
    fighters: [Entity; 2],
}

impl FightSession {
    pub fn new(config: FightConfig, library: MoveLibrary) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(MatchState::new(config.intro_freeze));
        world.insert_resource(MoveBindings::with_defaults());
        world.insert_resource(MatchLog::default());
        world.insert_resource(library);

        let fighters = [
            spawn_fighter(&mut world, &config, 1, FighterColor::Red, -START_X),
            spawn_fighter(&mut world, &config, 2, FighterColor::Blue, START_X),
        ];
        world.insert_resource(config);

        world.add_observer(button_pressed_observer);
        world.add_observer(move_request_observer);
        world.add_observer(hit_observer);
        world.add_observer(pause_toggle_observer);
        world.add_observer(record_health_changed);
        world.add_observer(record_game_over);
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems((controls_system, move_player_system, movement).chain());

        info!("Fight session ready");
        Self {
            world,
            schedule,
            fighters,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Entity of fighter `number` (1 or 2).
    pub fn entity(&self, number: u8) -> Option<Entity> {
        match number {
            1 => Some(self.fighters[0]),
            2 => Some(self.fighters[1]),
            _ => None,
        }
    }

    fn component<T: Component>(&self, number: u8) -> Option<&T> {
        self.entity(number).and_then(|e| self.world.get::<T>(e))
    }

    pub fn fighter(&self, number: u8) -> Option<&Fighter> {
        self.component(number)
    }

    pub fn skeleton(&self, number: u8) -> Option<&Skeleton> {
        self.component(number)
    }

    pub fn move_player(&self, number: u8) -> Option<&MovePlayer> {
        self.component(number)
    }

    pub fn controls(&self, number: u8) -> Option<&ControlState> {
        self.component(number)
    }

    pub fn rigidbody(&self, number: u8) -> Option<&RigidBody> {
        self.component(number)
    }

    pub fn match_state(&self) -> &MatchState {
        self.world.resource::<MatchState>()
    }

    pub fn match_log(&self) -> &MatchLog {
        self.world.resource::<MatchLog>()
    }

    pub fn library(&self) -> &MoveLibrary {
        self.world.resource::<MoveLibrary>()
    }

    pub fn library_mut(&mut self) -> Mut<'_, MoveLibrary> {
        self.world.resource_mut::<MoveLibrary>()
    }

    pub fn bindings(&self) -> &MoveBindings {
        self.world.resource::<MoveBindings>()
    }

    pub fn config(&self) -> &FightConfig {
        self.world.resource::<FightConfig>()
    }

    /// Equip library move `name` on fighter `number` and bind it to the
    /// fighter's first free button. Returns the button, if one was free.
    pub fn equip(&mut self, number: u8, name: &str) -> Result<Option<String>> {
        let entity = self
            .entity(number)
            .ok_or_else(|| FightError::InvalidMoveReference(format!("fighter {number}")))?;
        let m = self
            .library()
            .get(name)
            .cloned()
            .ok_or_else(|| FightError::InvalidMoveReference(name.to_string()))?;

        let Some(mut fighter) = self.world.get_mut::<Fighter>(entity) else {
            return Err(FightError::InvalidMoveReference(format!("fighter {number}")));
        };
        if !fighter.add_move(Arc::new(m)) {
            return Ok(None);
        }

        let mut bindings = self.world.resource_mut::<MoveBindings>();
        let button = bindings.free_button(number).map(str::to_string);
        match &button {
            Some(b) => {
                bindings.register(b, name);
            }
            None => warn!("Fighter {} has no free button for '{}'", number, name),
        }
        Ok(button)
    }

    /// Remove move `name` from fighter `number` and unbind its button.
    pub fn unequip(&mut self, number: u8, name: &str) -> bool {
        let Some(entity) = self.entity(number) else {
            return false;
        };
        let removed = self
            .world
            .get_mut::<Fighter>(entity)
            .is_some_and(|mut fighter| fighter.delete_move(name).is_some());
        if removed {
            self.world
                .resource_mut::<MoveBindings>()
                .deregister_for(number, name);
        }
        removed
    }

    pub fn press(&mut self, button: &str) {
        self.world.trigger(ButtonPressedEvent {
            button: button.to_string(),
        });
        self.world.flush();
    }

    pub fn request_move(&mut self, number: u8, move_name: &str) {
        self.world.trigger(MoveRequestedEvent {
            fighter: number,
            move_name: move_name.to_string(),
        });
        self.world.flush();
    }

    /// Report a collider overlap between two fighters.
    pub fn hit(
        &mut self,
        attacker: u8,
        defender: u8,
        attacker_collider: Collider,
        defender_collider: Collider,
    ) {
        let (Some(attacker), Some(defender)) = (self.entity(attacker), self.entity(defender))
        else {
            warn!("Hit between unknown fighters {} and {}", attacker, defender);
            return;
        };
        self.world.trigger(HitEvent {
            attacker,
            defender,
            attacker_collider,
            defender_collider,
        });
        self.world.flush();
    }

    pub fn toggle_pause(&mut self) {
        self.world.trigger(PauseToggleEvent {});
        self.world.flush();
    }

    /// Advance the simulation by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    /// Start a fresh match: movesets, bindings, health, poses and locks are
    /// all cleared and the intro freeze is re-armed.
    pub fn reset(&mut self) {
        let config = self.config().clone();
        for (i, &entity) in self.fighters.iter().enumerate() {
            let Ok(mut e) = self.world.get_entity_mut(entity) else {
                continue;
            };
            if let Some(mut fighter) = e.get_mut::<Fighter>() {
                fighter.reset();
            }
            let mut skeleton = Skeleton::new();
            if let Some(mut player) = e.get_mut::<MovePlayer>() {
                player.clear(&mut skeleton);
            }
            e.insert((
                skeleton,
                ControlState::default(),
                RigidBody::with_physics(FIGHTER_FRICTION, config.mass),
                MapPosition::new(start_x(i), 0.0),
            ));
        }
        {
            let mut bindings = self.world.resource_mut::<MoveBindings>();
            bindings.clear_fighter(1);
            bindings.clear_fighter(2);
        }
        self.world.resource_mut::<MatchLog>().clear();
        self.world
            .resource_mut::<MatchState>()
            .reset(config.intro_freeze);
        info!("Match reset");
    }
}

fn start_x(index: usize) -> f32 {
    if index == 0 { -START_X } else { START_X }
}

fn spawn_fighter(
    world: &mut World,
    config: &FightConfig,
    number: u8,
    color: FighterColor,
    x: f32,
) -> Entity {
    world
        .spawn((
            Fighter::new(number, color, config.health),
            MovePlayer::new(),
            Skeleton::new(),
            ControlState::default(),
            RigidBody::with_physics(FIGHTER_FRICTION, config.mass),
            MapPosition::new(x, 0.0),
        ))
        .id()
}
