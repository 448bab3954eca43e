//! Mob behavior: wander, chase along the tile graph, attack on cooldown.

use bevy::prelude::*;

use crate::combat::{CastSpellEvent, Dead, SpellKind};
use crate::core::{DeathEvent, Direction, SimRng};
use crate::physics::Motion;
use crate::player::Player;
use crate::world::{find_path, WorldMap};

use super::components::{AiState, AttackTimer, Enemy, MobBehavior, Wander};

const WANDER_HEADINGS: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

/// Drive every living mob's state machine.
///
/// Distance to the player decides the state: inside attack range the mob
/// plants itself and casts on cooldown, inside aggro radius it chases
/// along the tile graph, and otherwise it wanders. A mob whose path to
/// the player is broken falls back to walking straight at them.
pub fn mob_ai(
    time: Res<Time>,
    map: Res<WorldMap>,
    mut rng: ResMut<SimRng>,
    player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut mobs: Query<
        (
            Entity,
            &Transform,
            &mut Motion,
            &mut AiState,
            &MobBehavior,
            &mut AttackTimer,
            &mut Wander,
        ),
        (With<Enemy>, Without<Dead>),
    >,
    mut casts: EventWriter<CastSpellEvent>,
) {
    let Ok(player_transform) = player.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, transform, mut motion, mut state, behavior, mut attack, mut wander) in &mut mobs {
        if *state == AiState::Dead {
            continue;
        }
        let pos = transform.translation.truncate();
        let distance = pos.distance(player_pos);

        if distance <= behavior.attack_range {
            *state = AiState::Attacking;
            motion.velocity = Vec2::ZERO;
            attack.0.tick(time.delta());
            if attack.0.just_finished() {
                casts.send(CastSpellEvent {
                    caster: entity,
                    origin: pos,
                    kind: SpellKind::MagicBullet,
                    direction: Direction::from_vec(player_pos - pos),
                });
            }
            continue;
        }
        // Cooldown keeps running out of range so re-engaging is not a
        // free instant cast.
        attack.0.tick(time.delta());

        if distance <= behavior.aggro_radius {
            *state = AiState::Chasing;
            let waypoint = match find_path(&map, pos, player_pos) {
                Some(path) if path.len() > 1 => path[1],
                _ => player_pos,
            };
            motion.steer(Direction::from_vec(waypoint - pos));
            continue;
        }

        *state = AiState::Idle;
        wander.timer.tick(time.delta());
        if wander.timer.just_finished() {
            // Roll idle half the time so the world does not look like a
            // marching band.
            wander.heading = if rng.index(2) == 0 {
                Direction::None
            } else {
                WANDER_HEADINGS[rng.index(WANDER_HEADINGS.len())]
            };
        }
        motion.steer(wander.heading);
    }
}

/// Freeze mobs whose death was just resolved.
pub fn handle_mob_death(
    mut deaths: EventReader<DeathEvent>,
    mut mobs: Query<(&mut AiState, &mut Motion), With<Enemy>>,
) {
    for event in deaths.read() {
        if let Ok((mut state, mut motion)) = mobs.get_mut(event.entity) {
            *state = AiState::Dead;
            motion.velocity = Vec2::ZERO;
        }
    }
}

/// Sweep dead mobs out of the world at the end of the tick. Loot and XP
/// were already handed out while the corpse still existed.
pub fn despawn_dead_mobs(
    mut commands: Commands,
    mobs: Query<Entity, (With<Enemy>, With<Dead>)>,
) {
    for entity in &mobs {
        commands.entity(entity).despawn();
    }
}
