//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use trek_walk::{StrategyKind, WalkConfig};

use crate::config::TrekConfig;

/// Parses a strategy name or numeric selector.
pub fn parse_strategy(s: &str) -> Result<StrategyKind> {
    s.parse::<StrategyKind>()
        .with_context(|| format!("invalid [walk].strategy: {s:?}"))
}

/// Builds a [`WalkConfig`] from the TOML configuration.
pub fn build_walk_config(config: &TrekConfig) -> Result<WalkConfig> {
    let mut cfg = WalkConfig::new(config.walk.steps)
        .with_strategy(parse_strategy(&config.walk.strategy)?)
        .with_labels(config.matrix.labels.iter().cloned());
    if let Some(seed) = config.seed {
        cfg = cfg.with_seed(seed);
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trek_markov::DEFAULT_SEED;

    #[test]
    fn defaults_convert() {
        let cfg = build_walk_config(&TrekConfig::default()).unwrap();
        assert_eq!(cfg.steps(), 100);
        assert_eq!(cfg.strategy(), StrategyKind::Random);
        assert_eq!(cfg.seed(), DEFAULT_SEED);
        assert_eq!(cfg.labels().unwrap().len(), 4);
    }

    #[test]
    fn numeric_strategy_selector() {
        assert_eq!(parse_strategy("1").unwrap(), StrategyKind::Spiral);
        assert_eq!(parse_strategy("2").unwrap(), StrategyKind::Breadcrumb);
    }

    #[test]
    fn bad_strategy_reports_context() {
        let mut toml = TrekConfig::default();
        toml.walk.strategy = "hop".to_string();
        let err = build_walk_config(&toml).unwrap_err();
        assert!(format!("{err:#}").contains("invalid [walk].strategy"));
    }

    #[test]
    fn seed_carried_over() {
        let mut toml = TrekConfig::default();
        toml.seed = Some(31);
        assert_eq!(build_walk_config(&toml).unwrap().seed(), 31);
    }
}
