//! Deterministic square spiral.

use tracing::debug;
use trek_lattice::{Direction, Point};
use trek_markov::SharedChain;

use crate::walker::{START, Walker};

/// Walks an outward square spiral: North, East, South, West with run lengths
/// `1, 1, 2, 2, 3, 3, ...`.
///
/// The chain is held so the spiral can be built through the same interface as
/// the other strategies, but it is never sampled.
#[derive(Debug)]
pub struct SpiralWalker {
    chain: SharedChain,
    position: Point,
    path: Vec<Point>,
}

impl SpiralWalker {
    /// Creates a spiral walker. The chain is not consulted.
    pub fn new(chain: SharedChain) -> Self {
        Self {
            chain,
            position: START,
            path: Vec::new(),
        }
    }

    /// The chain this walker was built with.
    pub fn chain(&self) -> &SharedChain {
        &self.chain
    }
}

impl Walker for SpiralWalker {
    /// Returns the origin followed by one point per step, so `n_steps + 1`
    /// points for positive `n_steps` and only the origin otherwise.
    ///
    /// Turning does not consume a step.
    fn walk(&mut self, n_steps: i64) -> &[Point] {
        self.path.clear();
        self.position = START;
        self.path.push(self.position);

        let mut direction = Direction::North;
        let mut run_length = 1u64;
        let mut taken = 0u64;
        let mut turns = 0u64;
        for _ in 0..n_steps.max(0) {
            if taken == run_length {
                direction = direction.clockwise();
                taken = 0;
                turns += 1;
                if turns % 2 == 0 {
                    run_length += 1;
                }
            }
            self.position.accumulate(direction.step());
            self.path.push(self.position);
            taken += 1;
        }
        debug!(n_steps, turns, end = %self.position, "spiral walk complete");
        &self.path
    }

    fn path(&self) -> &[Point] {
        &self.path
    }
}
