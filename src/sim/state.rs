//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives in `GameState`, including the
//! RNG, so the whole value can be cloned or serialized mid-run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::difficulty::Difficulty;
use super::gap::generate_gap_top;
use crate::error::ConfigError;
use crate::tuning::{GapPolicy, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by a collision, waiting for reset
    Stopped,
}

/// Something the presentation layer may want to react to (sound, flash, ...)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    Score { score: u32 },
    Collision { kind: CollisionKind },
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Centre; `x` never changes during a run
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vel: f32,
    pub radius: f32,
}

impl Avatar {
    /// Spawn at mid-height, at rest
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.viewport_height / 2.0),
            vel: 0.0,
            radius: tuning.avatar_radius,
        }
    }

    /// Replace the vertical velocity; repeated impulses do not stack
    pub fn apply_impulse(&mut self, jump_strength: f32) {
        self.vel = jump_strength;
    }

    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A pipe pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top edge of the gap
    pub gap_top: f32,
    /// Gap height in force when `gap_top` was drawn
    pub spawn_gap_height: f32,
    /// Whether passing this obstacle has been scored since its last recycle
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_top,
            spawn_gap_height: gap_height,
            scored: false,
        }
    }

    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Move back into play with a fresh gap
    pub fn recycle(&mut self, x: f32, gap_top: f32, gap_height: f32) {
        self.x = x;
        self.gap_top = gap_top;
        self.spawn_gap_height = gap_height;
        self.scored = false;
    }
}

/// Render-facing view of the avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Render-facing view of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub scored: bool,
}

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: u32,
    pub phase: GamePhase,
    pub started: bool,
    pub avatar: AvatarView,
    pub obstacles: Vec<ObstacleView>,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance and layout, validated at construction and read-only after
    pub(crate) tuning: Tuning,
    /// Points scored this run
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (only advances while running)
    pub time_ticks: u64,
    /// Speed and gap height for the current score
    pub difficulty: Difficulty,
    pub avatar: Avatar,
    /// Fixed-size pool, never grown or shrunk
    pub obstacles: Vec<Obstacle>,
    pub(crate) rng: Pcg32,
    /// Pending events for the presentation layer
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// Create a new game, rejecting tuning the simulation cannot honour
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        let mut state = Self {
            seed,
            difficulty: Difficulty::for_score(0, &tuning),
            avatar: Avatar::spawn(&tuning),
            obstacles: Vec::with_capacity(tuning.obstacle_count),
            tuning,
            score: 0,
            phase: GamePhase::NotStarted,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.spawn_obstacles();
        state
    }

    /// Lay out the obstacle pool at its starting positions
    fn spawn_obstacles(&mut self) {
        let gap_height = self.difficulty.gap_height;
        let t = &self.tuning;
        self.obstacles.clear();
        for i in 0..t.obstacle_count {
            let x = t.first_obstacle_x + i as f32 * t.obstacle_spacing;
            let gap_top =
                generate_gap_top(&mut self.rng, t.viewport_height, gap_height, t.gap_margin);
            self.obstacles.push(Obstacle::new(x, gap_top, gap_height));
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// True once the first jump has been made
    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    /// Jump input. Starts the run if it has not started yet; ignored once
    /// the run has stopped. Returns whether the impulse was applied.
    pub fn jump(&mut self) -> bool {
        match self.phase {
            GamePhase::Stopped => {
                log::debug!("Jump ignored while stopped");
                return false;
            }
            GamePhase::NotStarted => {
                self.phase = GamePhase::Running;
                log::info!("Run started (seed {})", self.seed);
            }
            GamePhase::Running => {}
        }
        self.avatar.apply_impulse(self.tuning.jump_strength);
        self.events.push(GameEvent::Jump);
        true
    }

    /// Reset input. Only honoured while stopped: reinitializes the avatar,
    /// obstacles, score and difficulty and goes straight back to running.
    pub fn reset(&mut self) -> bool {
        if self.phase != GamePhase::Stopped {
            log::debug!("Reset ignored in phase {:?}", self.phase);
            return false;
        }
        self.score = 0;
        self.difficulty = Difficulty::for_score(0, &self.tuning);
        self.avatar = Avatar::spawn(&self.tuning);
        self.spawn_obstacles();
        self.phase = GamePhase::Running;
        log::info!("Run reset");
        true
    }

    /// End the run. Only the first collision of a run has any effect.
    pub(crate) fn stop(&mut self, kind: CollisionKind) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Stopped;
        self.events.push(GameEvent::Collision { kind });
        log::info!(
            "Game over at tick {}: {:?}, score {}",
            self.time_ticks,
            kind,
            self.score
        );
    }

    /// Gap height the collision check uses for this obstacle
    pub fn gap_height_for(&self, obstacle: &Obstacle) -> f32 {
        match self.tuning.gap_policy {
            GapPolicy::Global => self.difficulty.gap_height,
            GapPolicy::AtSpawn => obstacle.spawn_gap_height,
        }
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        let width = self.tuning.obstacle_width;
        Snapshot {
            tick: self.time_ticks,
            score: self.score,
            phase: self.phase,
            started: self.started(),
            avatar: AvatarView {
                x: self.avatar.pos.x,
                y: self.avatar.pos.y,
                radius: self.avatar.radius,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width,
                    gap_top: o.gap_top,
                    gap_bottom: o.gap_top + self.gap_height_for(o),
                    scored: o.scored,
                })
                .collect(),
        }
    }
}
