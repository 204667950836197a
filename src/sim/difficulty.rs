//! Score-driven difficulty ramp

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Obstacle speed and gap height for a given score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Horizontal obstacle speed (units per tick)
    pub speed: f32,
    /// Gap height used for newly drawn gaps
    pub gap_height: f32,
}

impl Difficulty {
    /// Speed grows by 1 every 100 points; the gap shrinks every 2 points down
    /// to `min_gap_height`
    pub fn for_score(score: u32, tuning: &Tuning) -> Self {
        let speed = tuning.base_speed + score as f32 / 100.0;
        let steps = (score / 2) as f32;
        let gap_height = (tuning.base_gap_height - tuning.shrink_per_two_points * steps)
            .max(tuning.min_gap_height);
        Self { speed, gap_height }
    }
}
