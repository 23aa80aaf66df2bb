//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed stage order
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod movement;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{LaserHit, find_laser_hits, resolve_craft_hit, resolve_laser_hits};
pub use entity::{Color, EntityId, EntityKind, ImageId, Label, Look, Sprite};
pub use geometry::{Bounded, Rect, overlaps};
pub use input::{Key, KeyEvent, handle_key, key_down, key_up, shoot};
pub use lifecycle::{age_explosions, destroy};
pub use movement::{move_craft, move_enemies, move_projectiles, wrap_craft};
pub use progression::{
    PowerLevel, check_game_over, refresh_lives_label, refresh_score_label, update_progression,
};
pub use spawn::{spawn_wave, spawn_x_range, update_spawner};
pub use state::{Backdrop, GameEvent, GamePhase, HeldKeys, Snapshot, Surface, World};
pub use tick::tick;
