use tracing_subscriber::EnvFilter;

/// Crate target that receives log output.
const CRATE_TARGET: &str = "hijri";

/// Maps the `-v` count to a level: 0 warn, 1 info, 2 debug, 3+ trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr. `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let default_filter = format!("{CRATE_TARGET}={}", level_for(verbosity));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
