use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Trek configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrekConfig {
    /// RNG seed for the Markov chain.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Transition matrix settings.
    #[serde(default)]
    pub matrix: MatrixToml,

    /// Walk settings.
    #[serde(default)]
    pub walk: WalkToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixToml {
    pub path: Option<PathBuf>,
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

impl Default for MatrixToml {
    fn default() -> Self {
        Self {
            path: None,
            labels: default_labels(),
        }
    }
}

fn default_labels() -> Vec<String> {
    ["N", "E", "S", "W"].map(String::from).to_vec()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkToml {
    #[serde(default = "default_steps")]
    pub steps: i64,
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

impl Default for WalkToml {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            strategy: default_strategy(),
        }
    }
}

fn default_steps() -> i64 {
    100
}
fn default_strategy() -> String {
    "random".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
}
