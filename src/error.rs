//! Configuration errors
//!
//! The simulation itself never fails at runtime; a bad `Tuning` is rejected
//! once, before a `GameState` is built.

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str, value: f32 },
    InvalidViewport { width: f32, height: f32 },
    NonPositiveRadius { radius: f32 },
    AvatarOutsideViewport { x: f32, radius: f32 },
    NonPositiveObstacleWidth { width: f32 },
    NoObstacles,
    JumpNotUpward { jump_strength: f32 },
    NegativeGravity { gravity: f32 },
    NonPositiveSpeed { speed: f32 },
    NegativeLayout { field: &'static str, value: f32 },
    NegativeGapMargin { margin: f32 },
    NegativeShrink { shrink: f32 },
    InvalidMinGap { min: f32, base: f32 },
    GapTooLarge { gap_height: f32, max: f32 },
    Io { path: String, message: String },
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport: {width}x{height}")
            }
            Self::NonPositiveRadius { radius } => {
                write!(f, "avatar radius must be positive, got {radius}")
            }
            Self::AvatarOutsideViewport { x, radius } => write!(
                f,
                "avatar at x={x} with radius {radius} does not fit in the viewport"
            ),
            Self::NonPositiveObstacleWidth { width } => {
                write!(f, "obstacle width must be positive, got {width}")
            }
            Self::NoObstacles => write!(f, "obstacle count must be at least 1"),
            Self::JumpNotUpward { jump_strength } => write!(
                f,
                "jump strength must be negative (upward), got {jump_strength}"
            ),
            Self::NegativeGravity { gravity } => {
                write!(f, "gravity must not be negative, got {gravity}")
            }
            Self::NonPositiveSpeed { speed } => {
                write!(f, "base obstacle speed must be positive, got {speed}")
            }
            Self::NegativeLayout { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::NegativeGapMargin { margin } => {
                write!(f, "gap margin must not be negative, got {margin}")
            }
            Self::NegativeShrink { shrink } => write!(
                f,
                "gap shrink per two points must not be negative, got {shrink}"
            ),
            Self::InvalidMinGap { min, base } => write!(
                f,
                "minimum gap height {min} must be in (0, {base}] (base gap height)"
            ),
            Self::GapTooLarge { gap_height, max } => write!(
                f,
                "gap height {gap_height} exceeds viewport height minus margins ({max})"
            ),
            Self::Io { path, message } => write!(f, "failed to read {path}: {message}"),
            Self::Parse { message } => write!(f, "invalid tuning file: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
