//! Slurm topology generator for InfiniBand fabrics
//!
//! Reads an `ibnetdiscover` report from a file or by running the program,
//! and prints either `topology.conf` lines or a JSON dump of the fabric.
//!
//! Configuration is loaded from a TOML file and overridden by command line
//! flags.

pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod settings;
pub mod source;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, Result};
pub use settings::Settings;
pub use source::ReportSource;

// =============================================================================
// Tracing Initialization
// =============================================================================

/// Initialize tracing/logging with the given filter level
///
/// Logs go to stderr; stdout carries the topology.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

// =============================================================================
// Run
// =============================================================================

/// Reads, parses and renders one report.
///
/// Returns the complete output text; nothing is produced if any stage fails.
pub fn execute(settings: &Settings) -> Result<String> {
    let report = settings.source.read()?;
    let topology = ibfabric::parse_str(&report)?;
    info!(
        source = %settings.source.describe(),
        switches = topology.len(),
        "Topology built"
    );

    if settings.dump {
        dump::to_json(&topology)
    } else {
        Ok(ibfabric::render(&topology, &settings.render).join("\n"))
    }
}
