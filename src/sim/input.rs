//! Keyboard input
//!
//! Navigation is level-based: [`HeldKeys`](super::state::HeldKeys) mirrors
//! whether left/right are physically down and movement reads it every tick.
//! Shooting is edge-triggered: one shot per space key-down.

use serde::{Deserialize, Serialize};

use super::entity::{Color, EntityId};
use super::progression::PowerLevel;
use super::state::World;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Space,
}

impl Key {
    /// Map a key identifier from the input layer; unknown keys are ignored
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "space" => Some(Key::Space),
            _ => None,
        }
    }
}

/// A discrete keyboard notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Dispatch a key event. Returns the lasers fired, if any.
pub fn handle_key(world: &mut World, event: KeyEvent) -> Vec<EntityId> {
    match event {
        KeyEvent::Down(Key::Space) => shoot(world),
        KeyEvent::Down(key) => {
            key_down(world, key);
            Vec::new()
        }
        KeyEvent::Up(key) => {
            key_up(world, key);
            Vec::new()
        }
    }
}

pub fn key_down(world: &mut World, key: Key) {
    match key {
        Key::Left => {
            world.held.left = true;
            if world.held.right {
                world.craft_speed = world.tuning.craft_speed;
            }
        }
        Key::Right => {
            world.held.right = true;
            if world.held.left {
                world.craft_speed = world.tuning.craft_speed;
            }
        }
        Key::Space => {}
    }
}

pub fn key_up(world: &mut World, key: Key) {
    match key {
        Key::Left => {
            world.held.left = false;
            if world.held.right {
                world.craft_speed = world.tuning.craft_speed;
            }
        }
        Key::Right => {
            world.held.right = false;
            if world.held.left {
                world.craft_speed = world.tuning.craft_speed;
            }
        }
        Key::Space => {}
    }
}

/// Fire from the craft: one base laser plus the bonus lasers unlocked by the
/// current score. Does nothing after game over.
pub fn shoot(world: &mut World) -> Vec<EntityId> {
    if world.is_game_over() {
        return Vec::new();
    }
    let x = world.craft.pos.x;
    let mut fired = vec![world.spawn_projectile(x, Color::YELLOW)];

    let level = PowerLevel::for_score(world.score, &world.tuning);
    for (offset, color) in level.bonus_lasers(&world.tuning) {
        fired.push(world.spawn_projectile(x + offset, color));
    }
    fired
}
