//! Idle/demo mode input policy
//!
//! Steers for the middle of the next gap. Good enough for an attract screen,
//! not a perfect player: very tall drops between consecutive gaps can still
//! beat it.

use std::cmp::Ordering;

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Fill in `input` for this tick as the autopilot would
pub fn drive(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::NotStarted => input.jump = true,
        GamePhase::Stopped => input.reset = true,
        GamePhase::Running => input.jump = wants_jump(state),
    }
}

/// Jump when the avatar's next position would sink below the target line
pub fn wants_jump(state: &GameState) -> bool {
    let avatar = &state.avatar;
    let width = state.tuning.obstacle_width;

    // Nearest obstacle the avatar has not fully cleared yet
    let next = state
        .obstacles
        .iter()
        .filter(|o| o.right_edge(width) >= avatar.pos.x - avatar.radius)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    let target_y = match next {
        Some(o) => o.gap_top + state.gap_height_for(o) / 2.0,
        None => state.tuning.viewport_height / 2.0,
    };

    avatar.pos.y + avatar.vel + state.tuning.gravity > target_y
}
