//! Baseline Markov-driven random walk.

use tracing::debug;
use trek_lattice::{Direction, Point};
use trek_markov::SharedChain;

use crate::error::WalkError;
use crate::walker::{START, Walker, lock_chain, resolve_directions};

/// Walks one unit per step in the direction of the chain's newly sampled state.
#[derive(Debug)]
pub struct RandomWalker {
    chain: SharedChain,
    directions: Vec<Direction>,
    position: Point,
    path: Vec<Point>,
}

impl RandomWalker {
    /// Creates a walker over `chain`, resolving each state to a direction.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`resolve_directions`].
    pub fn new(chain: SharedChain) -> Result<Self, WalkError> {
        let directions = resolve_directions(&lock_chain(&chain))?;
        Ok(Self {
            chain,
            directions,
            position: START,
            path: Vec::new(),
        })
    }

    /// The chain driving this walker.
    pub fn chain(&self) -> &SharedChain {
        &self.chain
    }

    /// Direction assigned to each state, indexed by state.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }
}

impl Walker for RandomWalker {
    /// Returns `n_steps + 1` points starting at the origin, or an empty path
    /// when `n_steps <= 0`.
    fn walk(&mut self, n_steps: i64) -> &[Point] {
        self.path.clear();
        self.position = START;
        if n_steps <= 0 {
            return &self.path;
        }

        self.path.push(self.position);
        let mut chain = lock_chain(&self.chain);
        for _ in 0..n_steps {
            let state = chain.next_state();
            self.position.accumulate(self.directions[state].step());
            self.path.push(self.position);
        }
        debug!(n_steps, end = %self.position, "random walk complete");
        &self.path
    }

    fn path(&self) -> &[Point] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trek_markov::MarkovChain;
    use trek_matrix::DenseMatrix;

    fn always(state: usize) -> SharedChain {
        let mut values = vec![0.0; 16];
        for row in 0..4 {
            values[row * 4 + state] = 1.0;
        }
        let t = DenseMatrix::from_values(&values, 4).unwrap();
        MarkovChain::new(&t)
            .unwrap()
            .with_labels(&["N", "E", "S", "W"])
            .into_shared()
    }

    #[test]
    fn straight_lines() {
        let cases = [
            (0, Point::new(0, 3)),
            (1, Point::new(3, 0)),
            (2, Point::new(0, -3)),
            (3, Point::new(-3, 0)),
        ];
        for (state, end) in cases {
            let mut walker = RandomWalker::new(always(state)).unwrap();
            let path = walker.walk(3);
            assert_eq!(path.len(), 4);
            assert_eq!(path[0], Point::ORIGIN);
            assert_eq!(*path.last().unwrap(), end);
        }
    }

    #[test]
    fn non_positive_steps_yield_empty_path() {
        let mut walker = RandomWalker::new(always(0)).unwrap();
        assert!(walker.walk(0).is_empty());
        assert!(walker.walk(-1).is_empty());
        assert!(walker.walk(i64::MIN).is_empty());
    }

    #[test]
    fn walk_resets_previous_path() {
        let mut walker = RandomWalker::new(always(1)).unwrap();
        walker.walk(5);
        let second = walker.walk(2).to_vec();
        assert_eq!(
            second,
            vec![Point::ORIGIN, Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(walker.path(), second.as_slice());
    }

    #[test]
    fn consecutive_points_are_unit_steps() {
        let t = DenseMatrix::from_values(&[0.25; 16], 4).unwrap();
        let chain = MarkovChain::new(&t)
            .unwrap()
            .with_seed(9)
            .with_labels(&["N", "E", "S", "W"])
            .into_shared();
        let mut walker = RandomWalker::new(chain).unwrap();
        let path = walker.walk(200);
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "non-unit step {d}");
        }
    }

    #[test]
    fn rejects_non_cardinal_labels() {
        let t = DenseMatrix::from_values(&[0.5, 0.5, 0.5, 0.5], 2).unwrap();
        let chain = MarkovChain::new(&t)
            .unwrap()
            .with_labels(&["up", "down"])
            .into_shared();
        assert!(matches!(
            RandomWalker::new(chain),
            Err(WalkError::UnknownDirection { state: 0, .. })
        ));
    }

    #[test]
    fn unlabelled_cycle_rejected() {
        // 0 -> 1 -> 2 -> 3 -> 0 with no labels attached.
        let mut values = vec![0.0; 16];
        for row in 0..4 {
            values[row * 4 + (row + 1) % 4] = 1.0;
        }
        let t = DenseMatrix::from_values(&values, 4).unwrap();
        let chain = MarkovChain::new(&t).unwrap().into_shared();
        assert!(matches!(
            RandomWalker::new(chain),
            Err(WalkError::UnknownDirection { state: 0, .. })
        ));
    }
}
