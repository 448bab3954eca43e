//! Hostile mobs: definitions, state machine AI, spawning.

mod ai;
mod components;
mod data;
mod plugin;
mod spawning;

pub use components::{AiState, AttackTimer, Enemy, MobBehavior, MobType, Wander, XpReward};
pub use data::{load_mob_definitions, MobDefinition, MobRegistry, MOB_DATA_DIR};
pub use plugin::EnemiesPlugin;
pub use spawning::{spawn_mob, MOB_HITBOX_HALF};
