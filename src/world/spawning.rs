//! World reset: repopulate the dynamic layer each time play begins.

use bevy::prelude::*;

use crate::combat::Effect;
use crate::core::{SimConfig, SimRng};
use crate::enemies::{spawn_mob, Enemy, MobRegistry};
use crate::items::Item;
use crate::player::{respawn_player, spawn_player, Player};

use super::map::WorldMap;

/// Reset the dynamic world on entering play.
///
/// Leftover mobs, effects, and items from a previous run are swept out,
/// the player is moved to a fresh random tile (spawned if this is the
/// first run), and a new batch of mobs is rolled. The static map is not
/// reloaded.
pub fn reset_world(
    mut commands: Commands,
    map: Res<WorldMap>,
    config: Res<SimConfig>,
    registry: Res<MobRegistry>,
    mut rng: ResMut<SimRng>,
    stale: Query<Entity, Or<(With<Enemy>, With<Effect>, With<Item>)>>,
    mut player: Query<Entity, With<Player>>,
) {
    for entity in &stale {
        commands.entity(entity).despawn();
    }

    let player_pos = map.random_tile(&mut rng);
    match player.get_single_mut() {
        Ok(entity) => respawn_player(&mut commands, entity, player_pos),
        Err(_) => {
            spawn_player(&mut commands, player_pos);
        }
    }

    let mut spawned = 0;
    for name in registry.spawn_cycle(config.mob_count) {
        let pos = map.random_tile(&mut rng);
        if spawn_mob(&mut commands, &registry, &name, pos).is_some() {
            spawned += 1;
        }
    }
    info!(
        "world reset: player at ({:.0}, {:.0}), {spawned} mobs spawned",
        player_pos.x, player_pos.y
    );
}
