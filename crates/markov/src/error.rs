//! Error types for the trek-markov crate.

/// Error type for all fallible operations in the trek-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a matrix is not a valid transition matrix.
    #[error("invalid transition matrix: {reason}")]
    InvalidTransitionMatrix {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_transition_matrix() {
        let e = MarkovError::InvalidTransitionMatrix {
            reason: "matrix is 2x3, expected square".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid transition matrix: matrix is 2x3, expected square"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MarkovError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MarkovError>();
    }
}
