//! Collision detection
//!
//! The avatar is a circle but is tested as its bounding box, against the
//! viewport's top/bottom edges and against each obstacle's two walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Avatar, GameState, Obstacle};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Left the viewport through the top or bottom edge
    Boundary,
    /// Hit the walls of the obstacle at this pool index
    Obstacle { index: usize },
}

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        let r = Vec2::splat(radius);
        Self {
            min: center - r,
            max: center + r,
        }
    }

    /// Open-interval overlap with the horizontal band `[left, right]`
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }

    /// Strictly inside the vertical band `[top, bottom]`; touching an edge
    /// does not count
    pub fn inside_y(&self, top: f32, bottom: f32) -> bool {
        self.min.y > top && self.max.y < bottom
    }
}

/// True if the avatar pokes out of the top or bottom of the viewport
pub fn check_boundary(avatar: &Avatar, viewport_height: f32) -> bool {
    avatar.top() < 0.0 || avatar.bottom() > viewport_height
}

/// True if the avatar overlaps the obstacle horizontally without being fully
/// inside its gap
pub fn check_obstacle(
    avatar: &Avatar,
    obstacle: &Obstacle,
    obstacle_width: f32,
    gap_height: f32,
) -> bool {
    let bounds = Aabb::around_circle(avatar.pos, avatar.radius);
    let in_column = bounds.overlaps_x(obstacle.x, obstacle.right_edge(obstacle_width));
    let in_gap = bounds.inside_y(obstacle.gap_top, obstacle.gap_top + gap_height);
    in_column && !in_gap
}

/// First collision in the current state, boundary before obstacles
pub fn first_collision(state: &GameState) -> Option<CollisionKind> {
    if check_boundary(&state.avatar, state.tuning.viewport_height) {
        return Some(CollisionKind::Boundary);
    }
    state
        .obstacles
        .iter()
        .position(|o| {
            check_obstacle(
                &state.avatar,
                o,
                state.tuning.obstacle_width,
                state.gap_height_for(o),
            )
        })
        .map(|index| CollisionKind::Obstacle { index })
}
