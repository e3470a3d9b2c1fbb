//! One-shot simulation: matrix and configuration in, path out.

use tracing::{debug, warn};
use trek_lattice::Point;
use trek_markov::{MarkovChain, SharedChain};
use trek_matrix::DenseMatrix;

use crate::breadcrumb::BreadcrumbWalker;
use crate::config::{StrategyKind, WalkConfig};
use crate::error::WalkError;
use crate::random::RandomWalker;
use crate::spiral::SpiralWalker;
use crate::walker::Walker;

/// Builds the walker selected by `kind` over `chain`.
///
/// # Errors
///
/// Direction-driven strategies fail if a state cannot be mapped to a
/// cardinal direction (see [`crate::resolve_directions`]).
pub fn build_walker(kind: StrategyKind, chain: SharedChain) -> Result<Box<dyn Walker>, WalkError> {
    let walker: Box<dyn Walker> = match kind {
        StrategyKind::Random => Box::new(RandomWalker::new(chain)?),
        StrategyKind::Spiral => Box::new(SpiralWalker::new(chain)),
        StrategyKind::Breadcrumb => Box::new(BreadcrumbWalker::new(chain)?),
    };
    Ok(walker)
}

/// Runs one walk over a fresh chain built from `matrix`.
///
/// # Arguments
///
/// * `matrix` - Transition matrix; copied into the chain.
/// * `config` - Strategy, step count, seed and state labels.
///
/// # Errors
///
/// - [`WalkError::Markov`] if `matrix` is not a valid transition matrix.
/// - [`WalkError::UnknownDirection`] if the strategy is direction-driven and
///   a state label is not a cardinal direction.
pub fn simulate(matrix: &DenseMatrix, config: &WalkConfig) -> Result<Vec<Point>, WalkError> {
    let mut chain = MarkovChain::new(matrix)?.with_seed(config.seed());
    if let Some(labels) = config.labels() {
        chain = chain.with_labels(labels);
    }
    if config.strategy().is_direction_driven() && chain.num_states() != 4 {
        warn!(
            n_states = chain.num_states(),
            strategy = %config.strategy(),
            "direction-driven walk expects a 4-state chain"
        );
    }

    let mut walker = build_walker(config.strategy(), chain.into_shared())?;
    let path = walker.walk(config.steps()).to_vec();
    debug!(
        strategy = %config.strategy(),
        steps = config.steps(),
        len = path.len(),
        "simulation complete"
    );
    Ok(path)
}
