//! Loot drops, pickups, and item expiry.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::{Dead, Health};
use crate::core::{DeathEvent, ItemPickupEvent, PlayerIntent, SimRng};
use crate::enemies::Enemy;
use crate::physics::{Hitbox, MAX_STEP_SECONDS};
use crate::player::Player;
use crate::world::rects_overlap;

use super::components::{Inventory, Item, ItemKind, ItemTtl};

/// Pickup collision half-extent.
const ITEM_HITBOX_HALF: f32 = 8.0;

/// Drop loot where a mob died.
///
/// Runs in the same tick as death resolution, while the corpse still has
/// a position; each death event is seen exactly once, so a mob never
/// drops twice.
pub fn drop_loot(
    mut commands: Commands,
    mut deaths: EventReader<DeathEvent>,
    mut rng: ResMut<SimRng>,
    mobs: Query<&Transform, With<Enemy>>,
) {
    for event in deaths.read() {
        let Ok(transform) = mobs.get(event.entity) else {
            continue;
        };
        let kind = if rng.0.gen_bool(0.25) {
            ItemKind::Potion
        } else {
            ItemKind::Gold(rng.0.gen_range(1..=10))
        };
        commands.spawn((
            Item { kind },
            ItemTtl::default(),
            Transform::from_translation(transform.translation),
            Hitbox::square(ITEM_HITBOX_HALF),
        ));
    }
}

/// Health restored when a potion is collected.
const POTION_HEAL: i32 = 20;

/// Collect items the player is standing on when the interact intent fires.
///
/// Gold goes to the inventory; potions are drunk on the spot. Either way
/// the item despawns and a pickup event goes out for external layers.
pub fn pickup_items(
    mut commands: Commands,
    intent: Res<PlayerIntent>,
    mut player: Query<
        (Entity, &Transform, &Hitbox, &mut Inventory, &mut Health),
        (With<Player>, Without<Dead>),
    >,
    items: Query<(Entity, &Transform, &Hitbox, &Item), Without<Player>>,
    mut pickups: EventWriter<ItemPickupEvent>,
) {
    if !intent.interact {
        return;
    }
    let Ok((player_entity, player_transform, player_hitbox, mut inventory, mut health)) =
        player.get_single_mut()
    else {
        return;
    };
    let player_rect = player_hitbox.rect_at(player_transform.translation.truncate());

    for (item_entity, item_transform, item_hitbox, item) in &items {
        let item_rect = item_hitbox.rect_at(item_transform.translation.truncate());
        if !rects_overlap(player_rect, item_rect) {
            continue;
        }
        match item.kind {
            ItemKind::Potion => health.restore(POTION_HEAL),
            ItemKind::Gold(_) => inventory.add(item.kind),
        }
        pickups.send(ItemPickupEvent {
            item: item_entity,
            player: player_entity,
        });
        commands.entity(item_entity).despawn();
    }
}

/// Sweep uncollected items whose timer ran out.
pub fn expire_items(
    mut commands: Commands,
    time: Res<Time>,
    mut items: Query<(Entity, &mut ItemTtl), With<Item>>,
) {
    let dt = time.delta_secs().min(MAX_STEP_SECONDS);
    for (entity, mut ttl) in &mut items {
        ttl.0.tick(std::time::Duration::from_secs_f32(dt));
        if ttl.0.finished() {
            commands.entity(entity).despawn();
        }
    }
}
