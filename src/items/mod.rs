//! Pickups and the player inventory.

mod components;
mod plugin;
mod systems;

pub use components::{Inventory, Item, ItemKind, ItemTtl};
pub use plugin::ItemsPlugin;
