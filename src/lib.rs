//! Star Strike - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, waves, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Craft horizontal step per tick while a direction key is held
    pub const CRAFT_SPEED: f32 = 10.0;
    /// Enemy vertical step per tick
    pub const ENEMY_SPEED: f32 = 3.0;
    /// Laser vertical step per tick
    pub const LASER_SPEED: f32 = 10.0;

    /// Ticks before the first wave
    pub const SPAWN_INTERVAL: u32 = 100;
    /// Extra ticks added to the countdown after every wave
    pub const WAVE_INTERVAL_BONUS: u32 = 200;
    /// Enemies per wave (inclusive range)
    pub const WAVE_SIZE_MIN: u32 = 10;
    pub const WAVE_SIZE_MAX: u32 = 20;
    /// Keep-out distance from the left/right screen edges when spawning
    pub const SPAWN_MARGIN: f32 = 100.0;
    /// Vertical pitch of an enemy slot inside a wave (includes enemy height)
    pub const WAVE_SPACING: f32 = 80.0;

    pub const STARTING_LIVES: u32 = 5;
    pub const SCORE_PER_HIT: u64 = 10;

    /// Score thresholds for the bonus lasers
    pub const DOUBLE_LASER_SCORE: u64 = 500;
    pub const TRIPLE_LASER_SCORE: u64 = 1000;
    /// Horizontal offset of a bonus laser from the craft
    pub const BONUS_LASER_OFFSET: f32 = 40.0;

    /// Alpha lost by an explosion every tick
    pub const EXPLOSION_FADE: f32 = 0.05;
    /// Alpha lost by the craft on every hit (hit flash)
    pub const CRAFT_HIT_FADE: f32 = 0.01;
    /// Explosion scale when the craft is hit
    pub const CRAFT_EXPLOSION_SCALE: f32 = 0.15;
    /// Explosion scale when a laser destroys an enemy
    pub const LASER_EXPLOSION_SCALE: f32 = 0.07;

    /// Craft respawn height as a fraction of the surface height
    pub const RESPAWN_HEIGHT: f32 = 0.8;

    /// Entity sizes in pixels (width, height)
    pub const CRAFT_SIZE: (f32, f32) = (60.0, 48.0);
    pub const ENEMY_SIZE: (f32, f32) = (40.0, 40.0);
    pub const LASER_SIZE: (f32, f32) = (5.0, 20.0);
    /// Native size of the explosion image before scaling
    pub const EXPLOSION_IMAGE_SIZE: (f32, f32) = (400.0, 400.0);
}
