//! Mob spawning from registry definitions.

use bevy::prelude::*;

use crate::combat::{Health, Mana};
use crate::physics::{Facing, Hitbox, Motion};

use super::components::{AiState, AttackTimer, Enemy, MobBehavior, MobType, Wander, XpReward};
use super::data::MobRegistry;

/// Collision half-extent shared by all mobs.
pub const MOB_HITBOX_HALF: f32 = 14.0;

/// Spawn one mob of the named kind at a world position.
///
/// Unknown names are logged and skipped rather than treated as fatal; a
/// typo in one data file should not take the whole spawn batch down.
pub fn spawn_mob(
    commands: &mut Commands,
    registry: &MobRegistry,
    name: &str,
    pos: Vec2,
) -> Option<Entity> {
    let Some(def) = registry.get(name) else {
        warn!("unknown mob kind '{name}', skipping spawn");
        return None;
    };

    let entity = commands
        .spawn((
            Enemy,
            MobType(def.name.clone()),
            Transform::from_translation(pos.extend(0.0)),
            Motion::walking(def.move_speed),
            Hitbox::square(MOB_HITBOX_HALF),
            Facing::default(),
            Health::new(def.max_health),
            Mana::new(def.max_mana),
            AiState::Idle,
            MobBehavior {
                aggro_radius: def.aggro_radius,
                attack_range: def.attack_range,
            },
            AttackTimer(Timer::from_seconds(def.attack_cooldown, TimerMode::Repeating)),
            Wander::default(),
            XpReward(def.xp_value),
        ))
        .id();
    Some(entity)
}
