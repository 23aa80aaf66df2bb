//! Score-driven power-ups, HUD refresh and the game-over transition

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Color;
use super::state::{Backdrop, GameEvent, GamePhase, World};
use crate::tuning::Tuning;

/// How many lasers a single shot fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerLevel {
    /// One laser from the craft
    Single,
    /// Plus one on the right
    Double,
    /// Plus one on each side
    Triple,
}

impl PowerLevel {
    pub fn for_score(score: u64, tuning: &Tuning) -> Self {
        if score >= tuning.triple_laser_score {
            PowerLevel::Triple
        } else if score >= tuning.double_laser_score {
            PowerLevel::Double
        } else {
            PowerLevel::Single
        }
    }

    /// Bonus lasers fired alongside the base one: offset from the craft and color
    pub fn bonus_lasers(self, tuning: &Tuning) -> Vec<(f32, Color)> {
        let offset = tuning.bonus_laser_offset;
        match self {
            PowerLevel::Single => Vec::new(),
            PowerLevel::Double => vec![(offset, Color::RED)],
            PowerLevel::Triple => vec![(offset, Color::RED), (-offset, Color::ORANGE)],
        }
    }

    /// Level-up banner text announcing the next threshold
    pub fn banner(self, tuning: &Tuning) -> String {
        match self {
            PowerLevel::Single => format!("Level Up At {}", tuning.double_laser_score),
            PowerLevel::Double => format!("Level Up At {}", tuning.triple_laser_score),
            PowerLevel::Triple => "Max Power".to_string(),
        }
    }
}

pub fn refresh_lives_label(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    world.lives_label.set_text(format!("Lives: {}", world.lives));
}

pub fn refresh_score_label(world: &mut World) {
    // After game over the label carries the final score
    if world.is_game_over() {
        return;
    }
    world.score_label.set_text(format!("SCORE: {}", world.score));
}

/// Announce the current power level on the level-up banner
pub fn update_progression(world: &mut World) {
    if world.is_game_over() {
        return;
    }
    let level = PowerLevel::for_score(world.score, &world.tuning);
    world.level_up_label.set_text(level.banner(&world.tuning));

    if level > world.power {
        world.power = level;
        world.events.push(GameEvent::PowerLevelChanged { level });
        log::info!("Power level {:?} at score {}", level, world.score);
    }
}

/// Returns true once the craft is out of lives, switching the world to the
/// game-over screen the first time.
pub fn check_game_over(world: &mut World) -> bool {
    if world.is_game_over() {
        return true;
    }
    if world.lives > 0 {
        world.game_over_label.hide();
        return false;
    }
    enter_game_over(world);
    true
}

/// Hide gameplay entities (without destroying them) and show the final score
fn enter_game_over(world: &mut World) {
    world.phase = GamePhase::GameOver;
    world.backdrop = Backdrop::Black;

    world.level_up_label.hide();
    world.lives_label.hide();
    world.craft.hide();
    for sprite in world
        .enemies
        .iter_mut()
        .chain(world.projectiles.iter_mut())
        .chain(world.explosions.iter_mut())
    {
        sprite.hide();
    }

    world.game_over_label.show();
    world.score_label.pos = Vec2::new(
        (world.surface.width / 2.0).floor(),
        world.surface.height * 0.5,
    );
    world
        .score_label
        .set_text(format!("FINAL SCORE: {}", world.score));

    world.events.push(GameEvent::GameOver {
        final_score: world.score,
    });
    log::info!(
        "Game over after {} ticks, final score {}",
        world.time_ticks,
        world.score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ImageId;
    use crate::sim::state::Surface;

    fn world() -> World {
        World::new(Surface::new(800.0, 700.0), 21)
    }

    #[test]
    fn test_power_levels() {
        let tuning = Tuning::default();
        assert_eq!(PowerLevel::for_score(0, &tuning), PowerLevel::Single);
        assert_eq!(PowerLevel::for_score(490, &tuning), PowerLevel::Single);
        assert_eq!(PowerLevel::for_score(500, &tuning), PowerLevel::Double);
        assert_eq!(PowerLevel::for_score(999, &tuning), PowerLevel::Double);
        assert_eq!(PowerLevel::for_score(1000, &tuning), PowerLevel::Triple);

        assert!(PowerLevel::Single.bonus_lasers(&tuning).is_empty());
        assert_eq!(PowerLevel::Double.bonus_lasers(&tuning), vec![(40.0, Color::RED)]);
        assert_eq!(
            PowerLevel::Triple.bonus_lasers(&tuning),
            vec![(40.0, Color::RED), (-40.0, Color::ORANGE)]
        );
    }

    #[test]
    fn test_banner_follows_score() {
        let mut world = world();
        update_progression(&mut world);
        assert_eq!(world.level_up_label.text, "Level Up At 500");

        world.score = 500;
        update_progression(&mut world);
        assert_eq!(world.level_up_label.text, "Level Up At 1000");
        assert_eq!(world.power, PowerLevel::Double);

        world.score = 1200;
        update_progression(&mut world);
        assert_eq!(world.level_up_label.text, "Max Power");

        let changes = world
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PowerLevelChanged { .. }))
            .count();
        assert_eq!(changes, 2);
    }

    #[test]
    fn test_labels_refresh() {
        let mut world = world();
        world.lives = 3;
        world.score = 70;
        refresh_lives_label(&mut world);
        refresh_score_label(&mut world);
        assert_eq!(world.lives_label.text, "Lives: 3");
        assert_eq!(world.score_label.text, "SCORE: 70");
    }

    #[test]
    fn test_alive_keeps_game_over_hidden() {
        let mut world = world();
        world.game_over_label.show();
        assert!(!check_game_over(&mut world));
        assert!(!world.game_over_label.visible);
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_scenario() {
        let mut world = world();
        world.spawn_enemy(Vec2::new(100.0, 100.0));
        world.spawn_projectile(300.0, Color::YELLOW);
        world.spawn_explosion(Vec2::ZERO, ImageId::Explosion, 0.07);
        world.score = 340;
        world.lives = 0;

        assert!(check_game_over(&mut world));
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(world.backdrop, Backdrop::Black);
        assert!(world.game_over_label.visible);
        assert!(!world.craft.visible);
        assert!(!world.lives_label.visible);
        assert!(!world.level_up_label.visible);

        // Hidden, not destroyed
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.explosions.len(), 1);
        assert!(world.enemies.iter().all(|s| !s.visible));
        assert!(world.projectiles.iter().all(|s| !s.visible));
        assert!(world.explosions.iter().all(|s| !s.visible));

        assert_eq!(world.score_label.text, "FINAL SCORE: 340");
        assert_eq!(world.score_label.pos, Vec2::new(400.0, 350.0));

        // Later refreshes and checks leave the final screen alone
        refresh_score_label(&mut world);
        assert!(check_game_over(&mut world));
        assert_eq!(world.score_label.text, "FINAL SCORE: 340");
        let overs = world
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
    }
}
