//! Lattice walk strategies driven by a Markov chain.
//!
//! Three strategies share the [`Walker`] contract:
//!
//! - [`RandomWalker`]: one unit step per sampled state, in that state's
//!   cardinal direction.
//! - [`BreadcrumbWalker`]: a random walk out, then the same trail back.
//! - [`SpiralWalker`]: a deterministic outward square spiral.
//!
//! Walkers hold a [`SharedChain`](trek_markov::SharedChain). Several walkers
//! may share one chain; each locks it for the length of a single walk.
//!
//! # Quick start
//!
//! ```rust
//! use trek_markov::MarkovChain;
//! use trek_matrix::DenseMatrix;
//! use trek_walk::{RandomWalker, Walker};
//!
//! let t = DenseMatrix::from_values(&[0.25; 16], 4).unwrap();
//! let chain = MarkovChain::new(&t)
//!     .unwrap()
//!     .with_labels(&["N", "E", "S", "W"])
//!     .into_shared();
//!
//! let mut walker = RandomWalker::new(chain).unwrap();
//! assert_eq!(walker.walk(10).len(), 11);
//! ```

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod random;
pub mod simulate;
pub mod spiral;
pub mod walker;

pub use breadcrumb::BreadcrumbWalker;
pub use config::{StrategyKind, WalkConfig};
pub use error::WalkError;
pub use random::RandomWalker;
pub use simulate::{build_walker, simulate};
pub use spiral::SpiralWalker;
pub use walker::{START, Walker, resolve_directions};
