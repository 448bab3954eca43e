//! Player plugin: intent handling, regen, and progression.

use bevy::prelude::*;

use crate::combat::apply_damage;
use crate::core::{GameState, SimSet};

use super::progression::{award_kills, check_player_death, log_game_over};
use super::systems::{apply_move_intent, cast_from_intent, regen_mana, teleport_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_move_intent, cast_from_intent, teleport_player, regen_mana)
                .in_set(SimSet::Input),
        )
        .add_systems(
            Update,
            (check_player_death, award_kills)
                .in_set(SimSet::Combat)
                .after(apply_damage),
        )
        .add_systems(OnEnter(GameState::GameOver), log_game_over);
    }
}
