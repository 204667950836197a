//! Gapped-pipe simulation
//!
//! Everything that decides the outcome of a run: the avatar's gravity and
//! jump impulses, the fixed obstacle pool that scrolls left and gets
//! recycled, the seeded gap RNG, the score-driven difficulty curve and the
//! NotStarted/Running/Stopped phases. Renderers and sound read `Snapshot`s and
//! `GameEvent`s; nothing in here touches a platform API.

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod gap;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionKind, check_boundary, check_obstacle, first_collision};
pub use difficulty::Difficulty;
pub use gap::generate_gap_top;
pub use state::{
    Avatar, AvatarView, GameEvent, GamePhase, GameState, Obstacle, ObstacleView, Snapshot,
};
pub use tick::{TickInput, tick};
