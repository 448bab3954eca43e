//! Spells, live effects, damage, and death.

mod components;
mod plugin;
mod systems;

pub use components::{
    CastSpellEvent, Dead, Effect, Health, Mana, SpellKind, BULLET_HALF, BULLET_SPEED, SPELL_COST,
    STAT_MAX, STORM_MAX_RADIUS,
};
pub use plugin::CombatPlugin;
pub use systems::apply_damage;
