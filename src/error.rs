//! Error types
//!
//! The simulation itself never fails; only building a [`Tuning`](crate::Tuning)
//! from external data can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning json is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("wave size range is empty: {min}..={max}")]
    EmptyWaveRange { min: u32, max: u32 },

    #[error("power thresholds out of order: double at {double}, triple at {triple}")]
    ThresholdOrder { double: u64, triple: u64 },

    #[error("wave interval overflows: {interval} + {bonus} ticks")]
    WaveInterval { interval: u32, bonus: u32 },

    #[error("wave spacing {spacing} must exceed enemy height {enemy_height}")]
    WaveSpacing { spacing: f32, enemy_height: f32 },

    #[error("{field} must lie in (0, 1], got {value}")]
    NotFraction { field: &'static str, value: f32 },
}
