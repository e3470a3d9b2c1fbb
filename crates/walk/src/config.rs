//! Configuration for a single simulation run.

use std::fmt;
use std::str::FromStr;

use trek_markov::DEFAULT_SEED;

use crate::error::WalkError;

/// Which walk strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Markov-driven random walk.
    #[default]
    Random,
    /// Deterministic square spiral.
    Spiral,
    /// Random walk out, retraced back.
    Breadcrumb,
}

impl StrategyKind {
    /// All strategies, ordered by their numeric selector.
    pub const ALL: [StrategyKind; 3] = [Self::Random, Self::Spiral, Self::Breadcrumb];

    /// Returns `true` if the strategy steps in the direction of sampled states.
    pub fn is_direction_driven(self) -> bool {
        !matches!(self, Self::Spiral)
    }

    /// Lower-case name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Spiral => "spiral",
            Self::Breadcrumb => "breadcrumb",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = WalkError;

    /// Accepts a strategy name (case-insensitive) or its numeric selector
    /// `0` (random), `1` (spiral), `2` (breadcrumb).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" | "0" => Ok(Self::Random),
            "spiral" | "1" => Ok(Self::Spiral),
            "breadcrumb" | "2" => Ok(Self::Breadcrumb),
            _ => Err(WalkError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Parameters of one simulation run.
///
/// # Example
///
/// ```
/// use trek_walk::{StrategyKind, WalkConfig};
///
/// let config = WalkConfig::new(100)
///     .with_strategy(StrategyKind::Breadcrumb)
///     .with_seed(7)
///     .with_labels(["N", "E", "S", "W"]);
/// assert_eq!(config.steps(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct WalkConfig {
    steps: i64,
    seed: u64,
    strategy: StrategyKind,
    labels: Option<Vec<String>>,
}

impl WalkConfig {
    /// Creates a configuration for `steps` steps.
    ///
    /// Defaults: random strategy, seed [`DEFAULT_SEED`], no state labels.
    pub fn new(steps: i64) -> Self {
        Self {
            steps,
            seed: DEFAULT_SEED,
            strategy: StrategyKind::default(),
            labels: None,
        }
    }

    /// Sets the walk strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the chain's random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the state labels attached to the chain.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    // --- Accessors ---

    /// Number of steps to walk.
    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// Random seed for the chain.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Strategy to run.
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// State labels, if any.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }
}
