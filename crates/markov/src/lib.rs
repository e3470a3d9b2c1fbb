//! Finite-state Markov chain for lattice walk simulation.
//!
//! A [`MarkovChain`] owns a validated, row-stochastic transition matrix and a
//! seeded random source, and steps between states by cumulative-probability
//! sampling. Optional string labels name each state.
//!
//! # Quick start
//!
//! ```rust
//! use trek_markov::{MarkovChain, is_valid_transition_matrix};
//! use trek_matrix::DenseMatrix;
//!
//! let t: DenseMatrix = "0.25,0.25,0.25,0.25\n0.25,0.25,0.25,0.25\n\
//!                       0.25,0.25,0.25,0.25\n0.25,0.25,0.25,0.25"
//!     .parse()
//!     .unwrap();
//! assert!(is_valid_transition_matrix(&t));
//!
//! let mut chain = MarkovChain::new(&t)
//!     .unwrap()
//!     .with_seed(42)
//!     .with_labels(&["N", "E", "S", "W"]);
//! chain.next_state();
//! assert!(["N", "E", "S", "W"].contains(&chain.state_label().as_str()));
//! ```

pub mod chain;
pub mod error;

pub use chain::{DEFAULT_SEED, EPSILON, MarkovChain, SharedChain, is_valid_transition_matrix};
pub use error::MarkovError;
