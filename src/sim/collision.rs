//! Collision resolution
//!
//! Two passes run every tick:
//! - lasers vs enemies: every overlapping pair is resolved, each entity at most once
//! - craft vs enemies: only the first overlapping enemy counts per tick

use std::collections::HashSet;

use glam::Vec2;

use super::entity::{self, EntityId, EntityKind, ImageId};
use super::geometry::overlaps;
use super::lifecycle::{destroy, reap_ids};
use super::progression::refresh_lives_label;
use super::state::{GameEvent, World};

/// A laser/enemy pair that collided this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserHit {
    pub projectile: EntityId,
    pub enemy: EntityId,
    /// Enemy position at impact (where the explosion goes)
    pub at: Vec2,
}

/// Find laser/enemy pairs. Each laser claims the first enemy (in spawn order)
/// it overlaps that no earlier laser has claimed.
pub fn find_laser_hits(world: &World) -> Vec<LaserHit> {
    let mut claimed: HashSet<EntityId> = HashSet::new();
    let mut hits = Vec::new();

    for laser in &world.projectiles {
        let target = world
            .enemies
            .iter()
            .find(|enemy| !claimed.contains(&enemy.id) && overlaps(laser, *enemy));

        if let Some(enemy) = target {
            claimed.insert(enemy.id);
            hits.push(LaserHit {
                projectile: laser.id,
                enemy: enemy.id,
                at: enemy.pos,
            });
        }
    }
    hits
}

/// Destroy every laser/enemy pair that overlaps, scoring each pair once.
///
/// Returns the number of enemies destroyed.
pub fn resolve_laser_hits(world: &mut World) -> usize {
    if world.is_game_over() {
        return 0;
    }
    let hits = find_laser_hits(world);
    if hits.is_empty() {
        return 0;
    }

    let scale = world.tuning.laser_explosion_scale;
    for hit in &hits {
        world.spawn_explosion(hit.at, ImageId::Explosion, scale);
        world.score += world.tuning.score_per_hit;
        world.events.push(GameEvent::EnemyShot {
            enemy: hit.enemy,
            projectile: hit.projectile,
            score: world.score,
        });
        log::debug!(
            "Laser {} destroyed enemy {} at ({:.0}, {:.0}), score {}",
            hit.projectile,
            hit.enemy,
            hit.at.x,
            hit.at.y,
            world.score
        );
    }

    let spent: HashSet<EntityId> = hits.iter().map(|h| h.projectile).collect();
    let killed: HashSet<EntityId> = hits.iter().map(|h| h.enemy).collect();
    reap_ids(&mut world.projectiles, &mut world.events, &spent);
    reap_ids(&mut world.enemies, &mut world.events, &killed)
}

/// Handle the craft ramming an enemy. At most one collision is processed per
/// tick even if several enemies overlap the craft.
///
/// Returns the id of the enemy that hit the craft.
pub fn resolve_craft_hit(world: &mut World) -> Option<EntityId> {
    if world.is_game_over() {
        return None;
    }
    let (enemy_id, at) = world
        .enemies
        .iter()
        .find(|enemy| overlaps(&world.craft, *enemy))
        .map(|enemy| (enemy.id, enemy.pos))?;

    world.spawn_explosion(at, ImageId::Explosion, world.tuning.craft_explosion_scale);
    world.craft.fade(world.tuning.craft_hit_fade);
    world.craft.pos = entity::respawn_point(world.surface, &world.tuning);
    world.lives = world.lives.saturating_sub(1);
    refresh_lives_label(world);
    destroy(world, EntityKind::Enemy, enemy_id);

    world.events.push(GameEvent::CraftHit {
        lives_left: world.lives,
    });
    log::debug!("Craft hit by enemy {}, {} lives left", enemy_id, world.lives);
    Some(enemy_id)
}
