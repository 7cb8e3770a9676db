use crate::cube::Cube;
use crate::moves::Move;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Solve animation rate used when none is configured.
pub const DEFAULT_SOLVE_SPEED: u32 = 8;

impl Cube {
    /// The moves that would take the cube back through its recorded history. History is
    /// left untouched.
    pub fn inverse_sequence(&self) -> Vec<Move> {
        self.history().inverse_sequence()
    }

    /// Reverts the most recent recorded move and drops it from history. Returns false
    /// once history is empty.
    pub fn step_solve(&mut self) -> bool {
        match self.revert_last() {
            Some(mv) => {
                debug!("solve step {}", mv.inverse());
                true
            }
            None => false,
        }
    }

    /// Runs [`Cube::step_solve`] until history is exhausted. Returns the number of steps.
    pub fn solve_all(&mut self) -> usize {
        let mut steps = 0;
        while self.step_solve() {
            steps += 1;
        }
        info!("solved in {steps} moves");
        steps
    }
}

/// Paces repeated [`Cube::step_solve`] calls for a caller running its own frame loop.
#[derive(Debug, Clone)]
pub struct SolveAnimation {
    interval: Duration,
    last_step: Option<Instant>,
}

impl SolveAnimation {
    pub fn new(moves_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / moves_per_second.max(1),
            last_step: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.last_step.is_some()
    }

    /// Starts animating if there is anything to solve.
    pub fn start(&mut self, cube: &Cube, now: Instant) -> bool {
        if cube.history().is_empty() {
            return false;
        }
        self.last_step = Some(now);
        true
    }

    pub fn stop(&mut self) {
        self.last_step = None;
    }

    /// Performs at most one solve step if a full interval has elapsed since the last one.
    /// Returns true if a step was taken.
    pub fn tick(&mut self, cube: &mut Cube, now: Instant) -> bool {
        let Some(last_step) = self.last_step else {
            return false;
        };
        if now.saturating_duration_since(last_step) < self.interval {
            return false;
        }
        let stepped = cube.step_solve();
        if stepped && !cube.history().is_empty() {
            self.last_step = Some(now);
        } else {
            self.stop();
        }
        stepped
    }
}

impl Default for SolveAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVE_SPEED)
    }
}
