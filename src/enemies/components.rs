//! Components for hostile mobs.

use bevy::prelude::*;

use crate::core::Direction;

/// Marker for hostile mobs.
#[derive(Component, Debug, Default)]
pub struct Enemy;

/// Which definition this mob was spawned from.
#[derive(Component, Debug, Clone)]
pub struct MobType(pub String);

/// The mob's behavioral state. Transitions are driven by distance to the
/// player and by death; a Dead mob takes no further AI decisions.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Idle,
    Chasing,
    Attacking,
    Dead,
}

/// Per-kind steering thresholds, copied from the definition at spawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct MobBehavior {
    pub aggro_radius: f32,
    pub attack_range: f32,
}

/// Cooldown between casts while attacking.
#[derive(Component, Debug)]
pub struct AttackTimer(pub Timer);

/// Idle wandering: hold a heading until the timer rolls a new one.
#[derive(Component, Debug)]
pub struct Wander {
    pub timer: Timer,
    pub heading: Direction,
}

impl Default for Wander {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(2.0, TimerMode::Repeating),
            heading: Direction::None,
        }
    }
}

/// Experience granted to whoever lands the killing blow.
#[derive(Component, Debug, Clone, Copy)]
pub struct XpReward(pub u32);
