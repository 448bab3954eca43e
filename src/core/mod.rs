//! Core simulation module - states, events, tick ordering, and the seeded RNG.
//!
//! This module provides the foundation that all other simulation systems
//! build upon.

mod direction;
mod events;
mod intent;
mod plugin;
mod rng;
mod states;

pub use direction::Direction;
pub use events::*;
pub use intent::PlayerIntent;
pub use plugin::CorePlugin;
pub use rng::{SimConfig, SimRng};
pub use states::{GameState, SimSet};
