//! Out-and-back walk that retraces its own trail.

use tracing::debug;
use trek_lattice::Point;
use trek_markov::SharedChain;

use crate::error::WalkError;
use crate::random::RandomWalker;
use crate::walker::{START, Walker};

/// Takes a random walk forward, then retraces it step by step back to the start.
///
/// Directions are sampled only on the way out; the return leg is the forward
/// path reversed, so the result is a palindrome of `2 * n_steps + 1` points.
#[derive(Debug)]
pub struct BreadcrumbWalker {
    forward: RandomWalker,
    path: Vec<Point>,
}

impl BreadcrumbWalker {
    /// Creates a walker over `chain`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`RandomWalker::new`].
    pub fn new(chain: SharedChain) -> Result<Self, WalkError> {
        Ok(Self {
            forward: RandomWalker::new(chain)?,
            path: Vec::new(),
        })
    }

    /// The chain driving the outbound leg.
    pub fn chain(&self) -> &SharedChain {
        self.forward.chain()
    }
}

impl Walker for BreadcrumbWalker {
    /// Returns `2 * n_steps + 1` points, or just the origin when `n_steps <= 0`.
    fn walk(&mut self, n_steps: i64) -> &[Point] {
        self.path.clear();
        if n_steps <= 0 {
            self.path.push(START);
            return &self.path;
        }

        let outbound = self.forward.walk(n_steps);
        self.path.extend_from_slice(outbound);
        if let Some((_, back)) = outbound.split_last() {
            self.path.extend(back.iter().rev());
        }
        debug!(n_steps, len = self.path.len(), "breadcrumb walk complete");
        &self.path
    }

    fn path(&self) -> &[Point] {
        &self.path
    }
}
