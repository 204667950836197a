//! Fixed timestep accumulator
//!
//! Turns variable frame deltas into a bounded number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta that is honoured; anything longer is treated as a stall
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add a frame's elapsed time and return how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        // Drop the backlog we could not run instead of carrying it forever
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Fraction of a step left over (0-1), for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
