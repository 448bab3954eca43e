//! Player control: translate intents into movement, casts, and teleports.

use bevy::prelude::*;

use crate::combat::{CastSpellEvent, Dead, Health, Mana, SpellKind};
use crate::core::PlayerIntent;
use crate::items::Inventory;
use crate::physics::{Facing, Hitbox, Motion};
use crate::world::WorldMap;

use super::components::{
    ManaRegen, Player, PlayerStats, PLAYER_HEALTH, PLAYER_MANA, PLAYER_SPEED,
};

/// Spawn the player character at a world position.
pub fn spawn_player(commands: &mut Commands, pos: Vec2) -> Entity {
    commands
        .spawn((
            Player,
            PlayerStats::default(),
            Transform::from_translation(pos.extend(0.0)),
            Motion::walking(PLAYER_SPEED),
            Hitbox::square(14.0),
            Facing::default(),
            Health::new(PLAYER_HEALTH),
            Mana::new(PLAYER_MANA),
            ManaRegen::default(),
            Inventory::default(),
        ))
        .id()
}

/// Re-seed an existing player for a fresh run: full vitals, new position,
/// no corpse marker. Progression and inventory carry over.
pub fn respawn_player(commands: &mut Commands, entity: Entity, pos: Vec2) {
    commands
        .entity(entity)
        .insert((
            Transform::from_translation(pos.extend(0.0)),
            Motion::walking(PLAYER_SPEED),
            Health::new(PLAYER_HEALTH),
            Mana::new(PLAYER_MANA),
        ))
        .remove::<Dead>();
}

/// Steer the player from this frame's movement intent. No intent means
/// no steering; friction takes over and the player coasts to a stop.
pub fn apply_move_intent(
    intent: Res<PlayerIntent>,
    mut player: Query<&mut Motion, (With<Player>, Without<Dead>)>,
) {
    let Ok(mut motion) = player.get_single_mut() else {
        return;
    };
    if !intent.move_dir.is_none() {
        motion.steer(intent.move_dir);
    }
}

/// Turn cast intents into cast requests aimed along the current facing.
pub fn cast_from_intent(
    intent: Res<PlayerIntent>,
    player: Query<(Entity, &Transform, &Facing), (With<Player>, Without<Dead>)>,
    mut casts: EventWriter<CastSpellEvent>,
) {
    let Ok((entity, transform, facing)) = player.get_single() else {
        return;
    };
    let origin = transform.translation.truncate();

    if intent.cast_primary {
        casts.send(CastSpellEvent {
            caster: entity,
            origin,
            kind: SpellKind::MagicBullet,
            direction: facing.0,
        });
    }
    if intent.cast_secondary {
        casts.send(CastSpellEvent {
            caster: entity,
            origin,
            kind: SpellKind::ManaStorm,
            direction: facing.0,
        });
    }
}

/// Debug teleport: snap the player onto the nearest walkable tile.
pub fn teleport_player(
    intent: Res<PlayerIntent>,
    map: Res<WorldMap>,
    mut player: Query<&mut Transform, (With<Player>, Without<Dead>)>,
) {
    if !intent.teleport {
        return;
    }
    let Ok(mut transform) = player.get_single_mut() else {
        return;
    };
    if let Some(tile) = map.nearest_tile(transform.translation.truncate()) {
        transform.translation.x = tile.center.x;
        transform.translation.y = tile.center.y;
        info!("teleported player to ({:.0}, {:.0})", tile.center.x, tile.center.y);
    }
}

/// Slow passive mana regeneration, one point per tick.
pub fn regen_mana(
    time: Res<Time>,
    mut player: Query<(&mut ManaRegen, &mut Mana), (With<Player>, Without<Dead>)>,
) {
    let Ok((mut regen, mut mana)) = player.get_single_mut() else {
        return;
    };
    regen.0.tick(time.delta());
    for _ in 0..regen.0.times_finished_this_tick() {
        mana.restore(1);
    }
}
