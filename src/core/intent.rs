//! The input collaborator contract.
//!
//! An external input layer (keyboard frontend, scripted driver, test) writes
//! a fresh `PlayerIntent` each frame; the simulation reads it during the
//! Input set and returns nothing synchronously - results are observed
//! through entity state on the next frame. Triggers are cleared in
//! PostUpdate so a stale press never fires twice.

use bevy::prelude::*;

use super::direction::Direction;

/// Per-frame input intents for the player character.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerIntent {
    /// Movement direction for this frame (`Direction::None` = no movement)
    pub move_dir: Direction,
    /// Cast the primary spell (magic bullet)
    pub cast_primary: bool,
    /// Cast the secondary spell (mana storm)
    pub cast_secondary: bool,
    /// Pick up items under the player
    pub interact: bool,
    /// Debug: snap the player onto the nearest walkable tile
    pub teleport: bool,
    /// Start the game from the title screen
    pub start: bool,
    /// Confirm the game-over screen (back to title)
    pub confirm: bool,
}

impl PlayerIntent {
    /// Reset all intents; called after every frame.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Clear intents at the end of the frame so each press is seen once.
pub fn clear_intent(mut intent: ResMut<PlayerIntent>) {
    intent.clear();
}
