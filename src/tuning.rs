//! Data-driven game balance
//!
//! Every physics and layout constant the simulation reads lives in `Tuning`.
//! Tuning files are JSON; missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which gap height the collision check uses for an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GapPolicy {
    /// The current difficulty's gap height, applied to every obstacle
    #[default]
    Global,
    /// The gap height in force when the obstacle's gap was drawn
    AtSpawn,
}

/// Game balance and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Avatar ===
    /// Horizontal position, fixed for the whole run
    pub avatar_x: f32,
    pub avatar_radius: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_strength: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_count: usize,
    pub first_obstacle_x: f32,
    pub obstacle_spacing: f32,
    /// Distance past the right edge where recycled obstacles reappear
    pub recycle_offset: f32,
    /// Minimum distance between a gap and the top/bottom edge
    pub gap_margin: f32,
    pub gap_policy: GapPolicy,

    // === Difficulty ===
    pub base_speed: f32,
    pub base_gap_height: f32,
    pub min_gap_height: f32,
    /// Gap shrink applied for every two points scored
    pub shrink_per_two_points: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            avatar_x: AVATAR_X,
            avatar_radius: AVATAR_RADIUS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_count: OBSTACLE_COUNT,
            first_obstacle_x: 300.0,
            obstacle_spacing: 200.0,
            recycle_offset: 100.0,
            gap_margin: GAP_MARGIN,
            gap_policy: GapPolicy::Global,

            base_speed: 2.0,
            base_gap_height: 150.0,
            min_gap_height: 80.0,
            shrink_per_two_points: 5.0,
        }
    }
}

impl Tuning {
    /// Largest gap that still leaves `gap_margin` above and below it
    pub fn max_gap_height(&self) -> f32 {
        self.viewport_height - 2.0 * self.gap_margin
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("avatar_x", self.avatar_x),
            ("avatar_radius", self.avatar_radius),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("obstacle_width", self.obstacle_width),
            ("first_obstacle_x", self.first_obstacle_x),
            ("obstacle_spacing", self.obstacle_spacing),
            ("recycle_offset", self.recycle_offset),
            ("gap_margin", self.gap_margin),
            ("base_speed", self.base_speed),
            ("base_gap_height", self.base_gap_height),
            ("min_gap_height", self.min_gap_height),
            ("shrink_per_two_points", self.shrink_per_two_points),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        let (w, h) = (self.viewport_width, self.viewport_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: w,
                height: h,
            });
        }

        if !(self.avatar_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                radius: self.avatar_radius,
            });
        }
        let r = self.avatar_radius;
        if self.avatar_x - r < 0.0 || self.avatar_x + r > w || 2.0 * r >= h {
            return Err(ConfigError::AvatarOutsideViewport {
                x: self.avatar_x,
                radius: r,
            });
        }

        if !(self.obstacle_width > 0.0) {
            return Err(ConfigError::NonPositiveObstacleWidth {
                width: self.obstacle_width,
            });
        }
        if self.obstacle_count == 0 {
            return Err(ConfigError::NoObstacles);
        }

        if !(self.jump_strength < 0.0) {
            return Err(ConfigError::JumpNotUpward {
                jump_strength: self.jump_strength,
            });
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::NegativeGravity {
                gravity: self.gravity,
            });
        }
        if !(self.base_speed > 0.0) {
            return Err(ConfigError::NonPositiveSpeed {
                speed: self.base_speed,
            });
        }

        let layout = [
            ("first_obstacle_x", self.first_obstacle_x),
            ("obstacle_spacing", self.obstacle_spacing),
            ("recycle_offset", self.recycle_offset),
        ];
        if let Some(&(field, value)) = layout.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::NegativeLayout { field, value });
        }

        if self.gap_margin < 0.0 {
            return Err(ConfigError::NegativeGapMargin {
                margin: self.gap_margin,
            });
        }
        // A negative shrink would grow the gap past the viewport as the score rises
        if self.shrink_per_two_points < 0.0 {
            return Err(ConfigError::NegativeShrink {
                shrink: self.shrink_per_two_points,
            });
        }

        if !(self.min_gap_height > 0.0 && self.min_gap_height <= self.base_gap_height) {
            return Err(ConfigError::InvalidMinGap {
                min: self.min_gap_height,
                base: self.base_gap_height,
            });
        }
        // The gap only ever shrinks, so the base gap is the one to check
        let max = self.max_gap_height();
        if self.base_gap_height > max {
            return Err(ConfigError::GapTooLarge {
                gap_height: self.base_gap_height,
                max,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
