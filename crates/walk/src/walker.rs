//! The common walker contract and helpers shared by the strategies.

use std::sync::{MutexGuard, PoisonError};

use trek_lattice::{Direction, Point};
use trek_markov::{MarkovChain, SharedChain};

use crate::error::WalkError;

/// Where every walk starts.
pub const START: Point = Point::ORIGIN;

/// A strategy that produces a lattice path of a requested number of steps.
///
/// Each call to [`Walker::walk`] discards the previous path and position;
/// only the shared chain carries state between calls.
pub trait Walker {
    /// Generates a new path of `n_steps` steps and returns it.
    fn walk(&mut self, n_steps: i64) -> &[Point];

    /// The most recently generated path.
    fn path(&self) -> &[Point];
}

/// Locks a shared chain, recovering the guard if a previous holder panicked.
pub(crate) fn lock_chain(chain: &SharedChain) -> MutexGuard<'_, MarkovChain> {
    chain.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resolves the cardinal direction of every state of `chain`.
///
/// Every state label must be `N`, `E`, `S` or `W`. An unlabelled chain is
/// resolved against its index labels `"0"`, `"1"`, ..., which never name a
/// direction.
///
/// # Errors
///
/// Returns [`WalkError::UnknownDirection`] for the first state whose label is
/// outside the cardinal set.
pub fn resolve_directions(chain: &MarkovChain) -> Result<Vec<Direction>, WalkError> {
    let labels: Vec<String> = match chain.labels() {
        Some(labels) => labels.to_vec(),
        None => (0..chain.num_states()).map(|i| i.to_string()).collect(),
    };
    labels
        .into_iter()
        .enumerate()
        .map(|(state, label)| match Direction::from_label(&label) {
            Some(direction) => Ok(direction),
            None => Err(WalkError::UnknownDirection { state, label }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trek_matrix::DenseMatrix;

    fn uniform(n: usize) -> DenseMatrix {
        DenseMatrix::from_values(&vec![1.0 / n as f64; n * n], n).unwrap()
    }

    #[test]
    fn labelled_chain_resolves_in_label_order() {
        let chain = MarkovChain::new(&uniform(4))
            .unwrap()
            .with_labels(&["W", "S", "E", "N"]);
        assert_eq!(
            resolve_directions(&chain).unwrap(),
            vec![
                Direction::West,
                Direction::South,
                Direction::East,
                Direction::North
            ]
        );
    }

    #[test]
    fn unknown_label_rejected() {
        let chain = MarkovChain::new(&uniform(4))
            .unwrap()
            .with_labels(&["N", "E", "S", "X"]);
        assert!(matches!(
            resolve_directions(&chain),
            Err(WalkError::UnknownDirection { state: 3, .. })
        ));
    }

    #[test]
    fn padded_label_rejected() {
        // The fourth state is padded with its index "3".
        let chain = MarkovChain::new(&uniform(4))
            .unwrap()
            .with_labels(&["N", "E", "S"]);
        match resolve_directions(&chain) {
            Err(WalkError::UnknownDirection { state, label }) => {
                assert_eq!(state, 3);
                assert_eq!(label, "3");
            }
            other => panic!("expected UnknownDirection, got {other:?}"),
        }
    }

    #[test]
    fn unlabelled_chain_rejected_at_first_state() {
        let chain = MarkovChain::new(&uniform(4)).unwrap();
        match resolve_directions(&chain) {
            Err(WalkError::UnknownDirection { state, label }) => {
                assert_eq!(state, 0);
                assert_eq!(label, "0");
            }
            other => panic!("expected UnknownDirection, got {other:?}"),
        }
    }
}
