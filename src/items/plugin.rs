//! Items plugin: loot drops, pickups, and expiry.

use bevy::prelude::*;

use crate::combat::apply_damage;
use crate::core::SimSet;

use super::systems::{drop_loot, expire_items, pickup_items};

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, pickup_items.in_set(SimSet::Input))
            .add_systems(
                Update,
                drop_loot.in_set(SimSet::Combat).after(apply_damage),
            )
            .add_systems(Update, expire_items.in_set(SimSet::Cleanup));
    }
}
