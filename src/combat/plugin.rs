//! Combat plugin wiring the resolver into the tick order.

use bevy::prelude::*;

use crate::core::SimSet;

use super::components::CastSpellEvent;
use super::systems::{
    advance_effects, apply_damage, despawn_expired_effects, detect_hits, process_casts,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CastSpellEvent>()
            .add_systems(
                Update,
                (process_casts, advance_effects, detect_hits, apply_damage)
                    .chain()
                    .in_set(SimSet::Combat),
            )
            .add_systems(
                Update,
                despawn_expired_effects.in_set(SimSet::Cleanup),
            );
    }
}
