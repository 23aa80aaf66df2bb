//! Data-driven game balance
//!
//! Every speed, threshold and size the simulation uses lives in [`Tuning`].
//! A world is built from one tuning and never mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Immutable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Speeds (pixels per tick) ===
    pub craft_speed: f32,
    pub enemy_speed: f32,
    pub laser_speed: f32,

    // === Waves ===
    /// Ticks before the first wave
    pub spawn_interval: u32,
    /// Added to `spawn_interval` when the countdown is re-armed after a wave
    pub wave_interval_bonus: u32,
    pub wave_size_min: u32,
    pub wave_size_max: u32,
    pub spawn_margin: f32,
    pub wave_spacing: f32,

    // === Scoring ===
    pub starting_lives: u32,
    pub score_per_hit: u64,
    pub double_laser_score: u64,
    pub triple_laser_score: u64,
    pub bonus_laser_offset: f32,

    // === Effects ===
    pub explosion_fade: f32,
    pub craft_hit_fade: f32,
    pub craft_explosion_scale: f32,
    pub laser_explosion_scale: f32,
    pub respawn_height: f32,

    // === Sizes ===
    pub craft_size: Vec2,
    pub enemy_size: Vec2,
    pub laser_size: Vec2,
    pub explosion_image_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            craft_speed: CRAFT_SPEED,
            enemy_speed: ENEMY_SPEED,
            laser_speed: LASER_SPEED,

            spawn_interval: SPAWN_INTERVAL,
            wave_interval_bonus: WAVE_INTERVAL_BONUS,
            wave_size_min: WAVE_SIZE_MIN,
            wave_size_max: WAVE_SIZE_MAX,
            spawn_margin: SPAWN_MARGIN,
            wave_spacing: WAVE_SPACING,

            starting_lives: STARTING_LIVES,
            score_per_hit: SCORE_PER_HIT,
            double_laser_score: DOUBLE_LASER_SCORE,
            triple_laser_score: TRIPLE_LASER_SCORE,
            bonus_laser_offset: BONUS_LASER_OFFSET,

            explosion_fade: EXPLOSION_FADE,
            craft_hit_fade: CRAFT_HIT_FADE,
            craft_explosion_scale: CRAFT_EXPLOSION_SCALE,
            laser_explosion_scale: LASER_EXPLOSION_SCALE,
            respawn_height: RESPAWN_HEIGHT,

            craft_size: CRAFT_SIZE.into(),
            enemy_size: ENEMY_SIZE.into(),
            laser_size: LASER_SIZE.into(),
            explosion_image_size: EXPLOSION_IMAGE_SIZE.into(),
        }
    }
}

impl Tuning {
    /// Parse a tuning document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject parameter sets the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("craft_speed", self.craft_speed),
            ("enemy_speed", self.enemy_speed),
            ("laser_speed", self.laser_speed),
            ("craft_explosion_scale", self.craft_explosion_scale),
            ("laser_explosion_scale", self.laser_explosion_scale),
            ("craft_size.x", self.craft_size.x),
            ("craft_size.y", self.craft_size.y),
            ("enemy_size.x", self.enemy_size.x),
            ("enemy_size.y", self.enemy_size.y),
            ("laser_size.x", self.laser_size.x),
            ("laser_size.y", self.laser_size.y),
            ("explosion_image_size.x", self.explosion_image_size.x),
            ("explosion_image_size.y", self.explosion_image_size.y),
        ];
        // `!(v > 0.0)` also catches NaN
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(TuningError::NotPositive { field, value });
        }
        if self.spawn_margin < 0.0 || self.spawn_margin.is_nan() {
            return Err(TuningError::NotPositive {
                field: "spawn_margin",
                value: self.spawn_margin,
            });
        }

        let fractions = [
            ("explosion_fade", self.explosion_fade),
            ("craft_hit_fade", self.craft_hit_fade),
            ("respawn_height", self.respawn_height),
        ];
        if let Some(&(field, value)) = fractions
            .iter()
            .find(|(_, v)| !(*v > 0.0 && *v <= 1.0))
        {
            return Err(TuningError::NotFraction { field, value });
        }

        if self.wave_size_min == 0 || self.wave_size_min > self.wave_size_max {
            return Err(TuningError::EmptyWaveRange {
                min: self.wave_size_min,
                max: self.wave_size_max,
            });
        }
        if self.double_laser_score > self.triple_laser_score {
            return Err(TuningError::ThresholdOrder {
                double: self.double_laser_score,
                triple: self.triple_laser_score,
            });
        }
        if self
            .spawn_interval
            .checked_add(self.wave_interval_bonus)
            .is_none()
        {
            return Err(TuningError::WaveInterval {
                interval: self.spawn_interval,
                bonus: self.wave_interval_bonus,
            });
        }
        if !(self.wave_spacing > self.enemy_size.y) {
            return Err(TuningError::WaveSpacing {
                spacing: self.wave_spacing,
                enemy_height: self.enemy_size.y,
            });
        }
        Ok(())
    }

    /// Vertical distance between consecutive enemies of one wave
    #[inline]
    pub fn wave_step(&self) -> f32 {
        self.wave_spacing - self.enemy_size.y
    }

    /// Countdown value after a wave has spawned
    #[inline]
    pub fn rearmed_countdown(&self) -> u32 {
        self.spawn_interval.saturating_add(self.wave_interval_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().wave_step(), 40.0);
        assert_eq!(Tuning::default().rearmed_countdown(), 300);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "enemy_speed": 5.0, "starting_lives": 3 }"#).unwrap();
        assert_eq!(tuning.enemy_speed, 5.0);
        assert_eq!(tuning.starting_lives, 3);
        assert_eq!(tuning.craft_speed, CRAFT_SPEED);
        assert_eq!(tuning.laser_size, Vec2::new(5.0, 20.0));
    }

    #[test]
    fn test_sizes_parse_as_pairs() {
        let tuning = Tuning::from_json(r#"{ "enemy_size": [30.0, 30.0] }"#).unwrap();
        assert_eq!(tuning.enemy_size, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ enemy_speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "laser_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NotPositive { field: "laser_speed", .. }));

        let err = Tuning::from_json(r#"{ "wave_size_min": 30 }"#).unwrap_err();
        assert!(matches!(err, TuningError::EmptyWaveRange { min: 30, max: 20 }));

        let err = Tuning::from_json(r#"{ "double_laser_score": 2000 }"#).unwrap_err();
        assert!(matches!(err, TuningError::ThresholdOrder { .. }));

        let err = Tuning::from_json(r#"{ "wave_spacing": 40.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::WaveSpacing { .. }));

        let err = Tuning::from_json(r#"{ "explosion_fade": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NotFraction { field: "explosion_fade", .. }));
    }

    #[test]
    fn test_rejects_overflowing_wave_interval() {
        let json = r#"{ "spawn_interval": 1, "wave_interval_bonus": 4294967295 }"#;
        let err = Tuning::from_json(json).unwrap_err();
        assert!(matches!(err, TuningError::WaveInterval { interval: 1, .. }));

        // Built by hand, skipping validation: the countdown saturates
        let tuning = Tuning {
            spawn_interval: u32::MAX,
            wave_interval_bonus: 1,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());
        assert_eq!(tuning.rearmed_countdown(), u32::MAX);
    }

    #[test]
    fn test_error_messages() {
        let err = TuningError::EmptyWaveRange { min: 5, max: 2 };
        assert_eq!(err.to_string(), "wave size range is empty: 5..=2");
    }
}
