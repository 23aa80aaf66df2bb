//! Per-tick movement of the craft, enemies and lasers

use super::lifecycle::reap;
use super::state::World;

/// Step the craft horizontally for each held direction key.
///
/// Both branches run when both keys are held, cancelling out.
pub fn move_craft(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    if world.held.left {
        world.craft_speed = world.tuning.craft_speed;
        world.craft.pos.x -= world.craft_speed;
    }
    if world.held.right {
        world.craft_speed = world.tuning.craft_speed;
        world.craft.pos.x += world.craft_speed;
    }
}

/// Wrap the craft to the opposite edge once its origin leaves the surface
pub fn wrap_craft(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    let width = world.surface.width;
    if world.craft.pos.x > width {
        world.craft.pos.x = 0.0;
    } else if world.craft.pos.x < 0.0 {
        world.craft.pos.x = width;
    }
}

/// Move enemies down; anything past the bottom re-enters from the top
pub fn move_enemies(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    let height = world.surface.height;
    for enemy in &mut world.enemies {
        enemy.pos.y += world.enemy_speed;
        if enemy.pos.y > height {
            enemy.pos.y = -enemy.size.y;
        }
    }
}

/// Move lasers up and destroy those fully above the surface
pub fn move_projectiles(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    let speed = world.tuning.laser_speed;
    reap(&mut world.projectiles, &mut world.events, |laser| {
        laser.pos.y -= speed;
        laser.pos.y + laser.size.y <= 0.0
    });
}
