//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Parses `ibnetdiscover` output to generate a Slurm topology file and
/// extract some other useful information
#[derive(Parser, Debug, Clone)]
#[command(name = "ibtopology", version, about, long_about = None)]
pub struct Cli {
    /// A file containing an output of `ibnetdiscover`
    #[arg(short = 'f', long)]
    pub input_file: Option<PathBuf>,

    /// Dump the internal structure in JSON
    #[arg(short, long)]
    pub dump: bool,

    /// Only list connected nodes, not switches
    #[arg(short, long, overrides_with = "with_switches")]
    pub nodes_only: bool,

    /// List switches even if the config file sets nodes_only
    #[arg(long, overrides_with = "nodes_only")]
    pub with_switches: bool,

    /// The full path to the `ibnetdiscover` program
    #[arg(short = 'I', long)]
    pub ibnetdiscover_path: Option<PathBuf>,

    /// Additional arguments passed to `ibnetdiscover`, quoted as one value (e.g. -A "-p -s")
    #[arg(short = 'A', long, allow_hyphen_values = true)]
    pub ibnetdiscover_args: Option<String>,

    /// Prefix to use when generating switch names
    #[arg(short = 'P', long)]
    pub prefix: Option<String>,

    /// Configuration file
    #[arg(short, long, default_value = "ibtopology.toml")]
    pub config: PathBuf,

    /// Log filter (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long)]
    pub log_level: Option<String>,
}
