//! Movement and collision for dynamic actors.

mod components;
mod plugin;
mod systems;

pub use components::{Facing, Hitbox, Motion};
pub use plugin::PhysicsPlugin;
pub use systems::MAX_STEP_SECONDS;
