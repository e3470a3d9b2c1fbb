use tracing_subscriber::EnvFilter;

/// Targets of the trek binary and its library crates.
const CRATE_TARGETS: &[&str] = &[
    "trek",
    "trek_io",
    "trek_lattice",
    "trek_markov",
    "trek_matrix",
    "trek_walk",
];

/// Installs the global stderr subscriber for a `trek` run.
///
/// Each `-v` raises the level for trek's own targets one notch above the
/// default of `warn` (`info`, `debug`, then `trace`). A set `RUST_LOG` wins
/// over the flag. Path output on stdout is never mixed with log lines.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
