//! Walk command: load a transition matrix, simulate, persist the path.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use trek_io::{PathFormat, format_path, write_path};
use trek_lattice::Point;
use trek_matrix::DenseMatrix;
use trek_walk::simulate;

use crate::cli::WalkArgs;
use crate::config::TrekConfig;
use crate::convert;

/// Run one simulation as described by the config file and CLI overrides.
pub fn run(args: WalkArgs) -> Result<()> {
    let _cmd = info_span!("walk").entered();

    // 1. Load project TOML (optional) and apply CLI overrides
    let mut config = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str::<TrekConfig>(&toml_str).context("failed to parse TOML config")?
        }
        None => TrekConfig::default(),
    };
    apply_overrides(&mut config, args);

    // 2. Build walk config
    let walk_cfg = convert::build_walk_config(&config)?;

    // 3. Read transition matrix
    let matrix_path = config.matrix.path.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no matrix path: set [matrix].path in config or use --matrix")
    })?;
    info!(path = %matrix_path.display(), "reading transition matrix");
    let matrix = DenseMatrix::from_file(matrix_path)
        .with_context(|| format!("failed to load matrix: {}", matrix_path.display()))?;
    info!("transition matrix:\n{}", matrix.pretty());

    // 4. Simulate
    let path = simulate(&matrix, &walk_cfg).context("simulation failed")?;
    info!(
        strategy = %walk_cfg.strategy(),
        steps = walk_cfg.steps(),
        n_points = path.len(),
        "walk complete"
    );

    // 5. Persist
    emit(&path, config.output.path.as_deref())
}

fn apply_overrides(config: &mut TrekConfig, args: WalkArgs) {
    if let Some(m) = args.matrix {
        config.matrix.path = Some(m);
    }
    if let Some(o) = args.output {
        config.output.path = Some(o);
    }
    if let Some(n) = args.steps {
        config.walk.steps = n;
    }
    if let Some(s) = args.strategy {
        config.walk.strategy = s;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
}

/// Writes the path to `output`, or to stdout in line format when no output is set.
fn emit(path: &[Point], output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(out) => {
            let format = write_path(out, path)
                .with_context(|| format!("could not save walk to {}", out.display()))?;
            info!(path = %out.display(), ?format, "path written");
        }
        None => print!("{}", format_path(path, PathFormat::Lines)),
    }
    Ok(())
}
