//! Combat resolution: casting, effect advancement, hit detection, damage.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::{DamageEvent, DeathEvent, Direction};
use crate::physics::{Hitbox, MAX_STEP_SECONDS};
use crate::world::{rects_overlap, WorldMap};

use super::components::{
    CastSpellEvent, Dead, Effect, Health, Mana, SpellKind, BULLET_HALF, BULLET_SPEED, SPELL_COST,
};

/// Resolve cast requests into live effects.
///
/// The mana gate is "any mana at all": a caster with 1 mana still casts
/// and bottoms out at zero. A caster with no mana gets a refused cast and
/// nothing is spawned.
pub fn process_casts(
    mut commands: Commands,
    mut casts: EventReader<CastSpellEvent>,
    mut casters: Query<&mut Mana>,
) {
    for cast in casts.read() {
        let Ok(mut mana) = casters.get_mut(cast.caster) else {
            continue;
        };
        if !mana.try_spend(SPELL_COST) {
            debug!("cast refused, caster {:?} is out of mana", cast.caster);
            continue;
        }

        match cast.kind {
            SpellKind::MagicBullet => {
                // A cast with no aim still produces a bullet somewhere.
                let dir = if cast.direction.is_none() {
                    Direction::South
                } else {
                    cast.direction
                };
                commands.spawn((
                    Effect::bullet(cast.caster, cast.origin, dir.unit()),
                    Transform::from_translation(cast.origin.extend(0.0)),
                    Hitbox::square(BULLET_HALF),
                ));
            }
            SpellKind::ManaStorm => {
                commands.spawn((
                    Effect::storm(cast.caster, cast.origin),
                    Transform::from_translation(cast.origin.extend(0.0)),
                ));
            }
        }
    }
}

/// Age every effect and fly the bullets. Storms stay put and only grow.
pub fn advance_effects(time: Res<Time>, mut effects: Query<(&mut Transform, &mut Effect)>) {
    let dt = time.delta_secs().min(MAX_STEP_SECONDS);
    for (mut transform, mut effect) in &mut effects {
        effect.age += dt;
        if effect.kind == SpellKind::MagicBullet {
            let step = effect.direction * BULLET_SPEED * dt;
            transform.translation.x += step.x;
            transform.translation.y += step.y;
        }
    }
}

/// Test every live effect against every damageable actor.
///
/// An actor enters the effect's hit set the first time it is touched and
/// never takes damage from that effect again. The caster is always
/// exempt from their own effects. Bullets stop at their first victim.
pub fn detect_hits(
    mut effects: Query<(&Transform, &mut Effect)>,
    targets: Query<(Entity, &Transform, &Hitbox), (With<Health>, Without<Dead>, Without<Effect>)>,
    mut damage: EventWriter<DamageEvent>,
) {
    for (effect_transform, mut effect) in &mut effects {
        let effect_pos = effect_transform.translation.truncate();
        for (target, target_transform, hitbox) in &targets {
            if target == effect.caster || effect.hit.contains(&target) {
                continue;
            }
            let target_rect = hitbox.rect_at(target_transform.translation.truncate());

            let touched = match effect.kind {
                SpellKind::MagicBullet => rects_overlap(
                    Rect::from_center_half_size(effect_pos, Vec2::splat(BULLET_HALF)),
                    target_rect,
                ),
                SpellKind::ManaStorm => {
                    circle_touches_rect(effect.origin, effect.radius(), target_rect)
                }
            };
            if !touched {
                continue;
            }

            effect.hit.insert(target);
            damage.send(DamageEvent {
                target,
                source: Some(effect.caster),
                amount: effect.damage,
            });
            if effect.kind == SpellKind::MagicBullet {
                break;
            }
        }
    }
}

/// Circle-vs-rect test via the closest point on the rect.
fn circle_touches_rect(center: Vec2, radius: f32, rect: Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    center.distance_squared(closest) <= radius * radius
}

/// Apply queued damage and mark deaths.
///
/// An entity dies at most once: the first event that depletes its health
/// inserts the [`Dead`] marker and emits a single death event; further
/// damage this frame or later is dropped.
pub fn apply_damage(
    mut commands: Commands,
    mut damage: EventReader<DamageEvent>,
    mut targets: Query<&mut Health, Without<Dead>>,
    mut deaths: EventWriter<DeathEvent>,
) {
    let mut died_this_frame: HashSet<Entity> = HashSet::new();
    for event in damage.read() {
        if died_this_frame.contains(&event.target) {
            continue;
        }
        let Ok(mut health) = targets.get_mut(event.target) else {
            continue;
        };
        health.take(event.amount);
        if health.is_depleted() {
            died_this_frame.insert(event.target);
            commands.entity(event.target).insert(Dead);
            deaths.send(DeathEvent {
                entity: event.target,
                killed_by: event.source,
            });
        }
    }
}

/// Sweep out finished effects.
///
/// An effect is finished when its lifetime ran out, or (for bullets) when
/// it has hit something or left the world. Running the sweep on an
/// already-clean world is a no-op.
pub fn despawn_expired_effects(
    mut commands: Commands,
    map: Res<WorldMap>,
    effects: Query<(Entity, &Transform, &Effect)>,
) {
    for (entity, transform, effect) in &effects {
        let pos = transform.translation.truncate();
        let finished = effect.expired()
            || (effect.kind == SpellKind::MagicBullet
                && (!effect.hit.is_empty() || !map.bounds.contains(pos)));
        if finished {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{MapObject, TILE_SIZE};
    use std::time::Duration;

    fn grid(width: i32, height: i32) -> WorldMap {
        let mut objects = Vec::new();
        for y in 0..height {
            for x in 0..width {
                objects.push(MapObject::tile(Vec2::new(
                    x as f32 * TILE_SIZE,
                    y as f32 * TILE_SIZE,
                )));
            }
        }
        WorldMap::from_objects(objects)
    }

    fn test_app(map: WorldMap) -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(map);
        app.add_event::<CastSpellEvent>();
        app.add_event::<DamageEvent>();
        app.add_event::<DeathEvent>();
        app.add_systems(
            Update,
            (
                process_casts,
                advance_effects,
                detect_hits,
                apply_damage,
                despawn_expired_effects,
            )
                .chain(),
        );
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.05));
        app.update();
    }

    fn spawn_target(app: &mut App, pos: Vec2, health: i32) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(pos.extend(0.0)),
                Health::new(health),
                Hitbox::square(14.0),
            ))
            .id()
    }

    fn health_of(app: &App, entity: Entity) -> i32 {
        app.world().entity(entity).get::<Health>().unwrap().current()
    }

    fn effect_count(app: &mut App) -> usize {
        app.world_mut().query::<&Effect>().iter(app.world()).count()
    }

    fn cast(app: &mut App, caster: Entity, origin: Vec2, kind: SpellKind, direction: Direction) {
        app.world_mut().send_event(CastSpellEvent {
            caster,
            origin,
            kind,
            direction,
        });
    }

    #[test]
    fn cast_without_mana_is_refused() {
        let mut app = test_app(grid(5, 5));
        let caster = app.world_mut().spawn(Mana::new(0)).id();

        cast(&mut app, caster, Vec2::new(32.0, 32.0), SpellKind::MagicBullet, Direction::East);
        step(&mut app);

        assert_eq!(effect_count(&mut app), 0);
    }

    #[test]
    fn low_mana_cast_succeeds_and_bottoms_out() {
        let mut app = test_app(grid(5, 5));
        let caster = app.world_mut().spawn(Mana::new(3)).id();

        cast(&mut app, caster, Vec2::new(32.0, 32.0), SpellKind::ManaStorm, Direction::None);
        step(&mut app);

        assert_eq!(effect_count(&mut app), 1);
        assert_eq!(
            app.world().entity(caster).get::<Mana>().unwrap().current(),
            0
        );
    }

    #[test]
    fn bullet_damages_its_target_exactly_once() {
        let mut app = test_app(grid(5, 5));
        let caster = app.world_mut().spawn(Mana::new(50)).id();
        let target = spawn_target(&mut app, Vec2::new(96.0, 32.0), 30);

        cast(&mut app, caster, Vec2::new(32.0, 32.0), SpellKind::MagicBullet, Direction::East);
        for _ in 0..12 {
            step(&mut app);
        }

        assert_eq!(health_of(&app, target), 20);
        // The bullet died on impact.
        assert_eq!(effect_count(&mut app), 0);
    }

    #[test]
    fn bullet_despawns_at_the_world_edge() {
        let mut app = test_app(grid(3, 3));
        let caster = app.world_mut().spawn(Mana::new(10)).id();

        cast(&mut app, caster, Vec2::new(32.0, 32.0), SpellKind::MagicBullet, Direction::East);
        step(&mut app);
        assert_eq!(effect_count(&mut app), 1);
        assert_eq!(
            app.world().entity(caster).get::<Mana>().unwrap().current(),
            5
        );

        // Bounds end at x = 80; at 200 units/s the bullet is out well
        // before its two-second lifetime.
        for _ in 0..8 {
            step(&mut app);
        }
        assert_eq!(effect_count(&mut app), 0);
    }

    #[test]
    fn storm_hits_nearby_targets_but_never_its_caster() {
        let mut app = test_app(grid(5, 5));
        let caster = app.world_mut().spawn((
            Mana::new(50),
            Health::new(30),
            Hitbox::square(14.0),
            Transform::from_translation(Vec3::new(32.0, 32.0, 0.0)),
        ));
        let caster = caster.id();
        let near = spawn_target(&mut app, Vec2::new(48.0, 32.0), 30);
        let far = spawn_target(&mut app, Vec2::new(128.0, 128.0), 30);

        cast(&mut app, caster, Vec2::new(32.0, 32.0), SpellKind::ManaStorm, Direction::None);
        // Run past the storm's full lifetime.
        for _ in 0..40 {
            step(&mut app);
        }

        assert_eq!(health_of(&app, near), 25, "one tick of storm damage");
        assert_eq!(health_of(&app, far), 30, "outside the maximum radius");
        assert_eq!(health_of(&app, caster), 30, "casters are exempt");
        assert_eq!(effect_count(&mut app), 0, "storm expired and was swept");
    }

    #[test]
    fn lethal_storm_leaves_its_victim_dead_at_zero() {
        let mut app = test_app(grid(5, 5));
        let caster = app.world_mut().spawn(Mana::new(50)).id();
        let victim = spawn_target(&mut app, Vec2::new(48.0, 32.0), 3);

        cast(&mut app, caster, Vec2::new(32.0, 32.0), SpellKind::ManaStorm, Direction::None);
        for _ in 0..40 {
            step(&mut app);
        }

        assert_eq!(health_of(&app, victim), 0, "clamped, never negative");
        assert!(app.world().entity(victim).get::<Dead>().is_some());
    }

    #[test]
    fn lethal_damage_emits_exactly_one_death() {
        let mut app = test_app(grid(3, 3));
        let target = spawn_target(&mut app, Vec2::new(32.0, 32.0), 30);

        // Two lethal hits land in the same frame.
        app.world_mut().send_event(DamageEvent {
            target,
            source: None,
            amount: 50,
        });
        app.world_mut().send_event(DamageEvent {
            target,
            source: None,
            amount: 50,
        });
        step(&mut app);

        assert_eq!(health_of(&app, target), 0);
        assert!(app.world().entity(target).get::<Dead>().is_some());
        assert_eq!(app.world().resource::<Events<DeathEvent>>().len(), 1);

        // Later damage against a dead entity is dropped entirely.
        app.world_mut().resource_mut::<Events<DeathEvent>>().clear();
        app.world_mut().send_event(DamageEvent {
            target,
            source: None,
            amount: 50,
        });
        step(&mut app);
        assert_eq!(app.world().resource::<Events<DeathEvent>>().len(), 0);
    }

    #[test]
    fn effect_sweep_is_idempotent_on_a_clean_world() {
        let mut app = test_app(grid(3, 3));
        step(&mut app);
        step(&mut app);
        assert_eq!(effect_count(&mut app), 0);
    }
}
