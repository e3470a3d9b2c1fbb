//! Error types for the trek-walk crate.

use trek_markov::MarkovError;

/// Error type for all fallible operations in the trek-walk crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WalkError {
    /// Returned when a state label is not one of `N`, `E`, `S`, `W`.
    #[error("state {state} has label {label:?}, expected one of N, E, S, W")]
    UnknownDirection {
        /// Index of the offending state.
        state: usize,
        /// The unrecognised label.
        label: String,
    },

    /// Returned when a strategy name cannot be parsed.
    #[error("unknown walk strategy: {name:?} (expected random, spiral or breadcrumb)")]
    UnknownStrategy {
        /// The unrecognised name.
        name: String,
    },

    /// Wraps a Markov chain construction failure.
    #[error(transparent)]
    Markov(#[from] MarkovError),
}
