// Restyle - applies an ordered set of UI style fixups to a dashboard source file

pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod rules;
pub mod utils;

pub use config::{ConfigLoader, FixupConfig};
pub use engine::{apply_fixups, apply_fixups_with, apply_rules, FixupOptions, FixupReport};
pub use error::{FixupError, Result};
pub use rules::{RuleKind, RuleSet, RuleSpec, DEFAULT_TARGET};

/// Line printed to stdout after a successful run
pub const CONFIRMATION_MESSAGE: &str = "UI style fixups applied successfully.";

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr
///
/// Stdout carries only the confirmation line (or the requested diff/report),
/// so every log line goes to stderr. `RUST_LOG` overrides the default filter.
pub fn init_logging(ansi_colors: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("restyle=info"));

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Initialized restyle v{}", version());
    Ok(())
}
