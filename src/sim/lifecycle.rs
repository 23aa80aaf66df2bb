//! Transient entity lifecycle
//!
//! Removing an entity from its collection and destroying it are the same
//! step here: whatever leaves a collection gets exactly one
//! [`GameEvent::Destroyed`], and nothing is left behind for a later tick.

use std::collections::HashSet;

use super::entity::{EntityId, EntityKind, Sprite};
use super::state::{GameEvent, World};

/// Remove every sprite for which `doomed` returns true. Survivors may be
/// mutated by the predicate. Returns the number removed.
pub(crate) fn reap<F>(list: &mut Vec<Sprite>, events: &mut Vec<GameEvent>, mut doomed: F) -> usize
where
    F: FnMut(&mut Sprite) -> bool,
{
    let before = list.len();
    list.retain_mut(|sprite| {
        if doomed(sprite) {
            events.push(GameEvent::Destroyed {
                id: sprite.id,
                kind: sprite.kind,
            });
            false
        } else {
            true
        }
    });
    before - list.len()
}

/// Remove all sprites whose id is in `ids`; absent ids are ignored
pub(crate) fn reap_ids(
    list: &mut Vec<Sprite>,
    events: &mut Vec<GameEvent>,
    ids: &HashSet<EntityId>,
) -> usize {
    if ids.is_empty() {
        return 0;
    }
    reap(list, events, |sprite| ids.contains(&sprite.id))
}

/// Destroy one entity. Returns false (and changes nothing) if it is not
/// present, e.g. already removed by an earlier pass.
pub fn destroy(world: &mut World, kind: EntityKind, id: EntityId) -> bool {
    let list = match kind {
        EntityKind::Enemy => &mut world.enemies,
        EntityKind::Projectile => &mut world.projectiles,
        EntityKind::Explosion => &mut world.explosions,
        // The craft is repositioned, never destroyed
        EntityKind::Craft => return false,
    };
    reap(list, &mut world.events, |sprite| sprite.id == id) > 0
}

/// Fade every explosion one step; reap those already fully transparent.
/// Hidden explosions on the game-over screen are left alone.
pub fn age_explosions(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    let fade = world.tuning.explosion_fade;
    reap(&mut world.explosions, &mut world.events, |explosion| {
        if explosion.alpha > 0.0 {
            explosion.fade(fade);
            false
        } else {
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Color, ImageId};
    use crate::sim::state::Surface;
    use glam::Vec2;

    fn world() -> World {
        World::new(Surface::new(800.0, 700.0), 7)
    }

    fn destroyed(world: &World, id: EntityId) -> usize {
        world
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Destroyed { id: d, .. } if *d == id))
            .count()
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut world = world();
        let a = world.spawn_enemy(Vec2::new(100.0, 0.0));
        let b = world.spawn_enemy(Vec2::new(200.0, 0.0));

        assert!(destroy(&mut world, EntityKind::Enemy, a));
        assert_eq!(world.enemies.len(), 1);

        let before = world.enemies.clone();
        assert!(!destroy(&mut world, EntityKind::Enemy, a));
        assert_eq!(world.enemies, before);
        assert_eq!(world.enemies[0].id, b);
        assert_eq!(destroyed(&world, a), 1);
    }

    #[test]
    fn test_destroy_wrong_collection_is_noop() {
        let mut world = world();
        let enemy = world.spawn_enemy(Vec2::ZERO);
        assert!(!destroy(&mut world, EntityKind::Projectile, enemy));
        let craft = world.craft.id;
        assert!(!destroy(&mut world, EntityKind::Craft, craft));
        assert_eq!(world.enemies.len(), 1);
    }

    #[test]
    fn test_reap_ids_ignores_absent() {
        let mut world = world();
        let laser = world.spawn_projectile(50.0, Color::YELLOW);
        let ids: HashSet<EntityId> = [laser, 9999].into_iter().collect();
        let removed = reap_ids(&mut world.projectiles, &mut world.events, &ids);
        assert_eq!(removed, 1);
        assert!(world.projectiles.is_empty());
        assert_eq!(reap_ids(&mut world.projectiles, &mut world.events, &ids), 0);
    }

    #[test]
    fn test_explosion_fades_then_reaped_once() {
        let mut world = world();
        let id = world.spawn_explosion(Vec2::ZERO, ImageId::Explosion, 0.07);

        age_explosions(&mut world);
        assert_eq!(world.explosions.len(), 1);
        assert!((world.explosions[0].alpha - 0.95).abs() < 1e-6);

        // 1.0 / 0.05 fades to reach zero, then one more tick to reap
        let mut ticks = 1;
        while !world.explosions.is_empty() {
            age_explosions(&mut world);
            ticks += 1;
            assert!(ticks < 100, "explosion never expired");
        }
        assert!((20..=22).contains(&ticks));
        assert_eq!(destroyed(&world, id), 1);

        age_explosions(&mut world);
        assert_eq!(destroyed(&world, id), 1);
    }

    #[test]
    fn test_transparent_explosion_reaped_immediately() {
        let mut world = world();
        world.spawn_explosion(Vec2::ZERO, ImageId::Explosion, 0.15);
        world.explosions[0].alpha = 0.0;
        age_explosions(&mut world);
        assert!(world.explosions.is_empty());
    }
}
