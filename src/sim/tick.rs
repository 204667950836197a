//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::autopilot;
use super::collision::first_collision;
use super::difficulty::Difficulty;
use super::gap::generate_gap_top;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space/click/tap)
    pub jump: bool,
    /// Restart after game over (enter)
    pub reset: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
///
/// Inputs are applied first (reset before jump), then the avatar, obstacles
/// and collisions are stepped if the run is live.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(state, &mut input);
    }

    if input.reset {
        state.reset();
    }
    if input.jump {
        state.jump();
    }

    // Frozen until the first jump and after a collision
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.avatar.integrate(state.tuning.gravity);
    advance_obstacles(state);

    if let Some(kind) = first_collision(state) {
        state.stop(kind);
    }
}

/// Scroll every obstacle left, score the ones the avatar has passed and
/// recycle the ones that left the screen
fn advance_obstacles(state: &mut GameState) {
    let GameState {
        tuning,
        score,
        difficulty,
        avatar,
        obstacles,
        rng,
        events,
        ..
    } = state;
    let width = tuning.obstacle_width;

    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        obstacle.x -= difficulty.speed;

        if !obstacle.scored && obstacle.right_edge(width) < avatar.pos.x {
            obstacle.scored = true;
            *score += 1;
            // Later obstacles this tick already move at the new speed
            *difficulty = Difficulty::for_score(*score, tuning);
            events.push(GameEvent::Score { score: *score });
        }

        if obstacle.right_edge(width) < 0.0 {
            let gap_top = generate_gap_top(
                rng,
                tuning.viewport_height,
                difficulty.gap_height,
                tuning.gap_margin,
            );
            obstacle.recycle(
                tuning.viewport_width + tuning.recycle_offset,
                gap_top,
                difficulty.gap_height,
            );
            log::debug!("Recycled obstacle {} with gap top {:.1}", index, gap_top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::CollisionKind;
    use crate::tuning::Tuning;

    /// Gap covers 50..550 for every obstacle, so only the edges can kill
    fn open_tuning() -> Tuning {
        Tuning {
            base_gap_height: 500.0,
            min_gap_height: 500.0,
            ..Default::default()
        }
    }

    /// One obstacle, no gravity: the avatar hangs at mid-height
    fn still_tuning() -> Tuning {
        Tuning {
            gravity: 0.0,
            obstacle_count: 1,
            ..open_tuning()
        }
    }

    fn running(tuning: Tuning) -> GameState {
        let mut state = GameState::with_tuning(tuning, 12345).expect("valid tuning");
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_tick_not_started_is_frozen() {
        let mut state = GameState::new(12345);
        let avatar = state.avatar.clone();
        let obstacles = state.obstacles.clone();

        for _ in 0..50 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.avatar, avatar);
        assert_eq!(state.obstacles, obstacles);
    }

    #[test]
    fn test_tick_jump_starts_run() {
        let mut state = GameState::new(12345);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time_ticks, 1);
        // Impulse, then one step of gravity
        assert_eq!(state.avatar.vel, -6.5);
        assert_eq!(state.avatar.pos.y, 293.5);
        assert_eq!(state.obstacles[0].x, 298.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Jump]);
    }

    #[test]
    fn test_boundary_collision_stops_run() {
        let mut state = running(Tuning::default());
        state.avatar.pos.y = state.avatar.radius - 1.0;
        state.avatar.vel = 0.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Stopped);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Collision {
                kind: CollisionKind::Boundary
            }]
        );
    }

    #[test]
    fn test_tick_stopped_is_frozen() {
        let mut state = running(Tuning::default());
        state.avatar.pos.y = 590.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Stopped);
        state.drain_events();

        let avatar = state.avatar.clone();
        let obstacles = state.obstacles.clone();
        let ticks = state.time_ticks;
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut state, &jump);
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.phase, GamePhase::Stopped);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.avatar, avatar);
        assert_eq!(state.obstacles, obstacles);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_obstacle_collision_stops_run() {
        let mut state = running(Tuning::default());
        state.obstacles[0].x = 92.0;
        state.obstacles[0].gap_top = 400.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Stopped);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Collision {
                kind: CollisionKind::Obstacle { index: 0 }
            }]
        );
    }

    #[test]
    fn test_scoring_uses_strict_edge_and_fires_once() {
        let mut state = running(still_tuning());
        // After one tick the trailing edge sits exactly on the avatar's x
        state.obstacles[0].x = 42.0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles[0].x + 60.0, 100.0);
        assert!(!state.obstacles[0].scored);
        assert_eq!(state.score, 0);

        tick(&mut state, &TickInput::default());
        assert!(state.obstacles[0].scored);
        assert_eq!(state.score, 1);
        assert_eq!(state.difficulty, Difficulty::for_score(1, &state.tuning));
        assert_eq!(state.drain_events(), vec![GameEvent::Score { score: 1 }]);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 1);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_recycle_moves_obstacle_right_and_clears_scored() {
        let mut state = running(still_tuning());
        state.obstacles[0].x = -58.0;

        tick(&mut state, &TickInput::default());
        // Scored this tick, but the right edge is exactly 0: not recycled yet
        assert_eq!(state.obstacles[0].x, -60.0);
        assert!(state.obstacles[0].scored);

        tick(&mut state, &TickInput::default());
        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.x, 900.0);
        assert!(!obstacle.scored);
        assert_eq!(obstacle.gap_top, 50.0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_recycled_gap_uses_current_gap_height() {
        let tuning = Tuning {
            gravity: 0.0,
            obstacle_count: 1,
            ..Default::default()
        };
        let mut state = running(tuning);
        // Off-screen left, so the avatar cannot touch it
        state.score = 9;
        state.obstacles[0].x = -58.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        tick(&mut state, &TickInput::default());

        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.x, 900.0);
        assert_eq!(obstacle.spawn_gap_height, 125.0);
        assert!(obstacle.gap_top >= 50.0);
        assert!(obstacle.gap_top <= 600.0 - 50.0 - 125.0 + 1e-3);
    }

    #[test]
    fn test_recycled_gap_fits_viewport_at_gap_floor() {
        let tuning = Tuning {
            gravity: 0.0,
            obstacle_count: 1,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut state = GameState::with_tuning(tuning.clone(), seed).expect("valid tuning");
            state.phase = GamePhase::Running;
            state.score = 40;
            state.difficulty = Difficulty::for_score(40, state.tuning());
            state.obstacles[0].x = -100.0;
            state.obstacles[0].scored = true;

            tick(&mut state, &TickInput::default());

            let view = &state.snapshot().obstacles[0];
            assert_eq!(view.x, 900.0);
            assert!(view.gap_top >= 50.0);
            assert!(view.gap_bottom <= 550.0 + 1e-3);
        }
    }

    #[test]
    fn test_end_to_end_periodic_jumps() {
        let mut state = GameState::with_tuning(open_tuning(), 2024).expect("valid tuning");
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::NotStarted);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump);
        assert_eq!(state.phase, GamePhase::Running);

        let mut last_score = state.score;
        for _ in 0..1000 {
            let input = TickInput {
                jump: state.avatar.pos.y > 300.0,
                ..Default::default()
            };
            tick(&mut state, &input);
            assert!(state.score >= last_score);
            last_score = state.score;
        }

        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.score >= 5, "score was {}", state.score);
        let scores: Vec<u32> = state
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::Score { score } => Some(score),
                _ => None,
            })
            .collect();
        assert_eq!(scores, (1..=state.score).collect::<Vec<_>>());
    }

    #[test]
    fn test_reset_input_restarts_after_game_over() {
        let mut state = running(Tuning::default());
        state.avatar.pos.y = 590.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Stopped);

        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &reset);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        // Reset then one live step
        assert_eq!(state.avatar.pos.y, 300.5);
        assert_eq!(state.obstacles[0].x, 298.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.avatar, state2.avatar);
        assert_eq!(state1.obstacles, state2.obstacles);
    }
}
