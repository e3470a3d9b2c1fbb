//! Finite-state Markov chain driven by a seeded random source.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use trek_matrix::DenseMatrix;

use crate::error::MarkovError;

/// Absolute tolerance when comparing a row sum against `1.0`.
pub const EPSILON: f64 = 1e-5;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0;

/// A chain shared between several walkers.
///
/// Walkers lock the mutex for the duration of one walk, so at most one of
/// them mutates the chain state at a time.
pub type SharedChain = Arc<Mutex<MarkovChain>>;

/// A discrete-time Markov chain over states `0..num_states`.
///
/// The chain owns a private copy of its transition matrix. The matrix is
/// validated once in [`MarkovChain::new`] and is not re-checked afterwards.
///
/// # Example
///
/// ```
/// use trek_markov::MarkovChain;
/// use trek_matrix::DenseMatrix;
///
/// let t = DenseMatrix::from_values(&[0.5, 0.5, 0.5, 0.5], 2).unwrap();
/// let mut chain = MarkovChain::new(&t).unwrap().with_seed(7);
/// assert!(chain.next_state() < 2);
/// ```
#[derive(Debug, Clone)]
pub struct MarkovChain {
    transitions: DenseMatrix,
    rng: StdRng,
    state: usize,
    labels: Option<Vec<String>>,
}

impl MarkovChain {
    /// Creates a chain from a deep copy of `matrix`, starting in state 0 with
    /// [`DEFAULT_SEED`].
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidTransitionMatrix`] if the matrix is
    /// empty, not square, or has a row whose sum differs from `1.0` by more
    /// than [`EPSILON`].
    pub fn new(matrix: &DenseMatrix) -> Result<Self, MarkovError> {
        check_transition_matrix(matrix)?;
        Ok(Self {
            transitions: matrix.clone(),
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
            state: 0,
            labels: None,
        })
    }

    /// Re-seeds the random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attaches a label to each state.
    ///
    /// States beyond the end of `labels` are labelled with their own index;
    /// extra labels are ignored.
    pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        let resolved = (0..self.num_states())
            .map(|i| match labels.get(i) {
                Some(l) => l.as_ref().to_string(),
                None => i.to_string(),
            })
            .collect();
        self.labels = Some(resolved);
        self
    }

    /// Wraps the chain for sharing between walkers.
    pub fn into_shared(self) -> SharedChain {
        Arc::new(Mutex::new(self))
    }

    /// Number of states (rows of the transition matrix).
    pub fn num_states(&self) -> usize {
        self.transitions.rows()
    }

    /// Index of the current state.
    pub fn state(&self) -> usize {
        self.state
    }

    /// The chain's private transition matrix.
    pub fn transition_matrix(&self) -> &DenseMatrix {
        &self.transitions
    }

    /// State labels, if any were attached.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Label of the current state, or its index when no labels are attached.
    pub fn state_label(&self) -> String {
        match &self.labels {
            Some(labels) => labels[self.state].clone(),
            None => self.state.to_string(),
        }
    }

    /// Forces the current state.
    ///
    /// Returns `false` and leaves the state unchanged if `state` is not a
    /// valid index.
    pub fn set_state(&mut self, state: usize) -> bool {
        if state >= self.num_states() {
            return false;
        }
        self.state = state;
        true
    }

    /// Samples the next state from the current row and makes it current.
    ///
    /// Draws `r` uniformly from `[0, 1)` and picks the first column whose
    /// cumulative probability exceeds `r`. If rounding keeps the row total at
    /// or below `r`, the last state is chosen.
    pub fn next_state(&mut self) -> usize {
        let r: f64 = self.rng.random();
        let row = self.transitions.row(self.state).unwrap_or_default();
        let next = choose_state(row, r);
        self.state = next;
        next
    }
}

/// Returns `true` if `matrix` is a non-empty square matrix whose rows each
/// sum to `1.0` within [`EPSILON`].
pub fn is_valid_transition_matrix(matrix: &DenseMatrix) -> bool {
    check_transition_matrix(matrix).is_ok()
}

fn check_transition_matrix(matrix: &DenseMatrix) -> Result<(), MarkovError> {
    if matrix.rows() < 1 {
        return Err(MarkovError::InvalidTransitionMatrix {
            reason: "matrix has no rows".to_string(),
        });
    }
    if !matrix.is_square() {
        return Err(MarkovError::InvalidTransitionMatrix {
            reason: format!(
                "matrix is {}x{}, expected square",
                matrix.rows(),
                matrix.cols()
            ),
        });
    }
    for i in 0..matrix.rows() {
        let sum: f64 = matrix.row(i).unwrap_or_default().iter().sum();
        if sum.is_nan() || (sum - 1.0).abs() > EPSILON {
            return Err(MarkovError::InvalidTransitionMatrix {
                reason: format!("row {i} sums to {sum}, expected 1"),
            });
        }
    }
    Ok(())
}

/// State reached from `row` for the draw `r`, clamped to the last state when
/// the running sum never exceeds `r`.
fn choose_state(row: &[f64], r: f64) -> usize {
    pick_column(row, r).unwrap_or_else(|| {
        let last = row.len().saturating_sub(1);
        debug!(to = last, r, "cumulative sum below draw");
        last
    })
}

/// First index whose running sum strictly exceeds `r`.
fn pick_column(row: &[f64], r: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, &p) in row.iter().enumerate() {
        cumulative += p;
        if cumulative > r {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(values: &[f64], cols: usize) -> DenseMatrix {
        DenseMatrix::from_values(values, cols).unwrap()
    }

    #[test]
    fn valid_matrices() {
        assert!(is_valid_transition_matrix(&matrix(&[1.0, 0.0, 1.0, 0.0], 2)));
        assert!(is_valid_transition_matrix(&matrix(&[0.5, 0.5, 0.5, 0.5], 2)));
        assert!(is_valid_transition_matrix(&matrix(&[1.0], 1)));
        assert!(is_valid_transition_matrix(&matrix(
            &[0.0, 1.0, 0.0, 0.33, 0.34, 0.33, 0.5, 0.5, 0.0],
            3
        )));
    }

    #[test]
    fn rectangular_rejected_even_with_good_sums() {
        let m = matrix(&[0.0, 1.0, 0.0, 0.5, 0.5, 0.0], 3);
        assert!(!is_valid_transition_matrix(&m));
    }

    #[test]
    fn empty_rejected() {
        assert!(!is_valid_transition_matrix(&DenseMatrix::zeros(0, 0)));
    }

    #[test]
    fn tolerance_boundary() {
        let inside = matrix(&[0.5, 0.5 + 0.5 * EPSILON, 0.5, 0.5], 2);
        assert!(is_valid_transition_matrix(&inside));

        let outside = matrix(&[0.5, 0.5 + 2.0 * EPSILON, 0.5, 0.5], 2);
        assert!(!is_valid_transition_matrix(&outside));
    }

    #[test]
    fn nan_rejected() {
        let m = matrix(&[f64::NAN, 1.0, 0.5, 0.5], 2);
        assert!(!is_valid_transition_matrix(&m));
    }

    #[test]
    fn new_reports_reason() {
        let err = MarkovChain::new(&matrix(&[0.2, 0.2, 0.5, 0.5], 2)).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn new_copies_matrix() {
        let mut original = matrix(&[1.0, 0.0, 0.0, 1.0], 2);
        let chain = MarkovChain::new(&original).unwrap();
        original.set(0, 0, 0.0).unwrap();
        original.set(0, 1, 1.0).unwrap();
        assert_eq!(chain.transition_matrix().get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn starts_in_state_zero() {
        let chain = MarkovChain::new(&matrix(&[0.5, 0.5, 0.5, 0.5], 2)).unwrap();
        assert_eq!(chain.state(), 0);
        assert_eq!(chain.num_states(), 2);
    }

    #[test]
    fn forced_transition_to_zero() {
        let mut chain = MarkovChain::new(&matrix(&[1.0, 0.0, 1.0, 0.0], 2)).unwrap();
        assert!(chain.set_state(1));
        assert_eq!(chain.next_state(), 0);
        assert_eq!(chain.state(), 0);
        assert_eq!(chain.next_state(), 0);
    }

    #[test]
    fn set_state_bounds() {
        let mut chain = MarkovChain::new(&matrix(&[1.0, 0.0, 1.0, 0.0], 2)).unwrap();
        assert!(chain.set_state(0));
        assert!(chain.set_state(1));
        assert!(!chain.set_state(2));
        assert!(!chain.set_state(20));
        assert_eq!(chain.state(), 1);
    }

    #[test]
    fn labels_padded_with_indices() {
        let chain = MarkovChain::new(&matrix(&[0.25; 16], 4))
            .unwrap()
            .with_labels(&["N", "E"]);
        assert_eq!(
            chain.labels().unwrap(),
            &["N".to_string(), "E".to_string(), "2".to_string(), "3".to_string()]
        );
    }

    #[test]
    fn extra_labels_ignored() {
        let chain = MarkovChain::new(&matrix(&[1.0], 1))
            .unwrap()
            .with_labels(&["only", "extra"]);
        assert_eq!(chain.labels().unwrap().len(), 1);
    }

    #[test]
    fn state_label_without_labels_is_index() {
        let mut chain = MarkovChain::new(&matrix(&[0.0, 1.0, 1.0, 0.0], 2)).unwrap();
        assert_eq!(chain.state_label(), "0");
        chain.next_state();
        assert_eq!(chain.state_label(), "1");
    }

    #[test]
    fn state_label_with_labels() {
        let mut chain = MarkovChain::new(&matrix(&[0.0, 1.0, 1.0, 0.0], 2))
            .unwrap()
            .with_labels(&["S", "W"]);
        assert_eq!(chain.state_label(), "S");
        chain.next_state();
        assert_eq!(chain.state_label(), "W");
    }

    #[test]
    fn pick_column_strictly_exceeds() {
        let row = [0.25, 0.25, 0.5];
        assert_eq!(pick_column(&row, 0.0), Some(0));
        assert_eq!(pick_column(&row, 0.25), Some(1));
        assert_eq!(pick_column(&row, 0.4999), Some(1));
        assert_eq!(pick_column(&row, 0.5), Some(2));
        assert_eq!(pick_column(&row, 0.9999), Some(2));
    }

    #[test]
    fn pick_column_skips_zero_probability() {
        assert_eq!(pick_column(&[0.0, 0.0, 1.0], 0.0), Some(2));
    }

    #[test]
    fn pick_column_short_sum() {
        // A row that is valid within EPSILON but falls short of the draw.
        assert_eq!(pick_column(&[0.5, 0.499995], 0.999999), None);
    }

    #[test]
    fn short_sum_clamps_to_last_state() {
        assert_eq!(choose_state(&[0.5, 0.499995], 0.999999), 1);
        assert_eq!(choose_state(&[0.2, 0.3, 0.499992], 0.99999), 2);
        assert_eq!(choose_state(&[0.2, 0.3, 0.5], 0.1), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let t = matrix(&[0.2, 0.5, 0.3, 0.3, 0.2, 0.5, 0.5, 0.3, 0.2], 3);
        let mut a = MarkovChain::new(&t).unwrap().with_seed(123);
        let mut b = MarkovChain::new(&t).unwrap().with_seed(123);
        let sa: Vec<usize> = (0..50).map(|_| a.next_state()).collect();
        let sb: Vec<usize> = (0..50).map(|_| b.next_state()).collect();
        assert_eq!(sa, sb);
    }
}
