//! Wave generation
//!
//! A countdown runs every tick. When it hits zero a random-sized column of
//! enemies is stacked above the surface so that they drift in one by one.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, Surface, World};
use crate::tuning::Tuning;

/// Inclusive range of spawn x positions for an enemy's left edge.
///
/// Normally `[margin, width - enemy_width - margin]`. On a surface too narrow
/// for both margins the range collapses to the centre of the free space, so
/// enemies still land inside the surface.
pub fn spawn_x_range(surface: Surface, tuning: &Tuning) -> (f32, f32) {
    let free = (surface.width - tuning.enemy_size.x).max(0.0);
    let lo = tuning.spawn_margin;
    let hi = free - tuning.spawn_margin;
    if hi < lo {
        let mid = (free / 2.0).floor();
        (mid, mid)
    } else {
        (lo, hi)
    }
}

/// Count down to the next wave, spawning it when the countdown is spent.
///
/// Returns the wave size if one spawned this tick. Stops after game over.
pub fn update_spawner(world: &mut World) -> Option<u32> {
    if world.is_game_over() {
        return None;
    }
    if world.spawn_countdown > 0 {
        world.spawn_countdown -= 1;
        return None;
    }
    Some(spawn_wave(world))
}

/// Spawn one wave immediately and re-arm the countdown
pub fn spawn_wave(world: &mut World) -> u32 {
    let tuning = &world.tuning;
    let (x_lo, x_hi) = spawn_x_range(world.surface, tuning);
    let height = tuning.enemy_size.y;
    let step = tuning.wave_step();
    let size = world
        .rng
        .random_range(tuning.wave_size_min..=tuning.wave_size_max);

    // Whole-pixel positions, each equally likely
    let (px_lo, px_hi) = (x_lo.ceil() as i32, x_hi.floor() as i32);

    for i in 0..size {
        let x = if px_hi > px_lo {
            world.rng.random_range(px_lo..=px_hi) as f32
        } else {
            x_lo
        };
        // Bottom edge of the first enemy sits on the top of the surface
        let y = -height - i as f32 * step;
        world.spawn_enemy(Vec2::new(x, y));
    }

    world.spawn_countdown = world.tuning.rearmed_countdown();
    world.waves_spawned += 1;
    world.events.push(GameEvent::WaveSpawned { size });
    log::info!(
        "Wave {}: {} enemies, next in {} ticks",
        world.waves_spawned,
        size,
        world.spawn_countdown
    );
    size
}
