//! Fixed-order simulation tick
//!
//! Core game loop that advances the world one frame deterministically.

use super::collision::{resolve_craft_hit, resolve_laser_hits};
use super::lifecycle::age_explosions;
use super::movement::{move_craft, move_enemies, move_projectiles, wrap_craft};
use super::progression::{
    check_game_over, refresh_lives_label, refresh_score_label, update_progression,
};
use super::spawn::update_spawner;
use super::state::{GamePhase, World};

/// Advance the world by one frame.
///
/// Returns the phase after the tick; the driver should stop ticking once it
/// sees [`GamePhase::GameOver`].
pub fn tick(world: &mut World) -> GamePhase {
    // Don't tick once the run is over
    if world.is_game_over() {
        return world.phase;
    }
    world.time_ticks += 1;

    move_craft(world);
    wrap_craft(world);
    update_spawner(world);
    move_enemies(world);
    move_projectiles(world);

    resolve_laser_hits(world);
    resolve_craft_hit(world);
    age_explosions(world);

    refresh_lives_label(world);
    refresh_score_label(world);
    update_progression(world);

    check_game_over(world);
    world.phase
}
