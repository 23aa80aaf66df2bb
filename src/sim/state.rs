//! Game state and core simulation types
//!
//! [`World`] is the single mutable aggregate. The driver owns it and hands a
//! `&mut World` to every update function.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{self, Color, EntityId, EntityKind, ImageId, Label, Sprite};
use super::progression::PowerLevel;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Display surface dimensions, supplied by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// Window background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backdrop {
    Starfield,
    Black,
}

/// Physical state of the navigation keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Things that happened during a tick, for renderers and logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: EntityId, kind: EntityKind },
    /// Entity left its collection for good; the renderer should free it
    Destroyed { id: EntityId, kind: EntityKind },
    WaveSpawned { size: u32 },
    CraftHit { lives_left: u32 },
    EnemyShot { enemy: EntityId, projectile: EntityId, score: u64 },
    PowerLevelChanged { level: PowerLevel },
    GameOver { final_score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub surface: Surface,
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub backdrop: Backdrop,

    pub craft: Sprite,
    pub craft_speed: f32,
    pub held: HeldKeys,

    /// Enemies in spawn order
    pub enemies: Vec<Sprite>,
    pub enemy_speed: f32,
    /// Ticks left until the next wave
    pub spawn_countdown: u32,
    pub waves_spawned: u32,

    pub projectiles: Vec<Sprite>,
    pub explosions: Vec<Sprite>,

    pub lives: u32,
    pub score: u64,
    /// Highest power level announced so far
    pub power: PowerLevel,

    pub lives_label: Label,
    pub score_label: Label,
    pub level_up_label: Label,
    pub game_over_label: Label,

    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events, drained by the driver
    pub events: Vec<GameEvent>,

    pub(crate) rng: Pcg32,
    next_id: EntityId,
}

impl World {
    /// Create a world with the default tuning
    pub fn new(surface: Surface, seed: u64) -> Self {
        Self::build(surface, Tuning::default(), seed)
    }

    /// Create a world with custom tuning, rejecting invalid parameters
    pub fn with_tuning(surface: Surface, tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(surface, tuning, seed))
    }

    fn build(surface: Surface, tuning: Tuning, seed: u64) -> Self {
        let (w, h) = (surface.width, surface.height);

        let lives_label = Label::new(
            format!("Lives: {}", tuning.starting_lives),
            Color::WHITE,
            20.0,
            Vec2::new((w / 2.0).floor() + 330.0, h - 50.0),
        );
        let score_label = Label::new("SCORE: 0", Color::WHITE, 30.0, Vec2::new(100.0, 50.0));
        let level_up_label = Label::new(
            PowerLevel::Single.banner(&tuning),
            Color::WHITE,
            15.0,
            Vec2::new(100.0, 20.0),
        );
        let mut game_over_label = Label::new(
            "GAME OVER",
            Color::RED,
            70.0,
            Vec2::new((w / 2.0).floor(), (h / 2.0).floor() - 100.0),
        );
        game_over_label.hide();

        let mut world = Self {
            surface,
            seed,
            phase: GamePhase::Playing,
            backdrop: Backdrop::Starfield,
            craft: entity::craft(0, surface, &tuning),
            craft_speed: tuning.craft_speed,
            held: HeldKeys::default(),
            enemies: Vec::new(),
            enemy_speed: tuning.enemy_speed,
            spawn_countdown: tuning.spawn_interval,
            waves_spawned: 0,
            projectiles: Vec::new(),
            explosions: Vec::new(),
            lives: tuning.starting_lives,
            score: 0,
            power: PowerLevel::Single,
            lives_label,
            score_label,
            level_up_label,
            game_over_label,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        };
        world.craft.id = world.next_entity_id();
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn spawn_enemy(&mut self, pos: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.enemies.push(entity::enemy(id, pos, &self.tuning));
        self.events.push(GameEvent::Spawned {
            id,
            kind: EntityKind::Enemy,
        });
        id
    }

    /// Fire a laser from horizontal position `x`, level with the craft
    pub fn spawn_projectile(&mut self, x: f32, color: Color) -> EntityId {
        let id = self.next_entity_id();
        let laser = entity::projectile(id, x, self.craft.pos.y, color, &self.tuning);
        self.projectiles.push(laser);
        self.events.push(GameEvent::Spawned {
            id,
            kind: EntityKind::Projectile,
        });
        id
    }

    pub fn spawn_explosion(&mut self, pos: Vec2, image: ImageId, scale: f32) -> EntityId {
        let id = self.next_entity_id();
        self.explosions
            .push(entity::explosion(id, pos, image, scale, &self.tuning));
        self.events.push(GameEvent::Spawned {
            id,
            kind: EntityKind::Explosion,
        });
        id
    }

    /// Copy of everything a renderer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            backdrop: self.backdrop,
            score: self.score,
            lives: self.lives,
            craft: self.craft.clone(),
            enemies: self.enemies.clone(),
            projectiles: self.projectiles.clone(),
            explosions: self.explosions.clone(),
            labels: vec![
                self.lives_label.clone(),
                self.score_label.clone(),
                self.level_up_label.clone(),
                self.game_over_label.clone(),
            ],
        }
    }
}

/// Immutable render view of a [`World`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub backdrop: Backdrop,
    pub score: u64,
    pub lives: u32,
    pub craft: Sprite,
    pub enemies: Vec<Sprite>,
    pub projectiles: Vec<Sprite>,
    pub explosions: Vec<Sprite>,
    pub labels: Vec<Label>,
}
