//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The combat resolver sends
//! DamageEvents, the health system applies them, and death side effects
//! (loot, kill counters, XP) hang off DeathEvents. This keeps the modules
//! independent and testable.

use bevy::prelude::*;

/// Sent when an entity takes damage.
///
/// The damage system listens for these and applies the actual health
/// reduction, clamping at the mutation site.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage, when identifiable
    pub source: Option<Entity>,
    /// Damage amount in health points
    pub amount: i32,
}

/// Sent exactly once when an entity's health reaches 0.
///
/// Systems listen for this to drop loot, award XP, bump the killer's
/// kill counter, and move the player to the game-over state.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}

/// Sent when the player picks up an item.
#[derive(Event)]
pub struct ItemPickupEvent {
    /// The item entity being picked up
    pub item: Entity,
    /// The player entity
    pub player: Entity,
}

/// Sent when the player levels up.
#[derive(Event)]
pub struct LevelUpEvent {
    /// The player entity
    pub player: Entity,
    /// New level
    pub new_level: u32,
}
