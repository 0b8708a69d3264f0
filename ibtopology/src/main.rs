//! Slurm topology generator for InfiniBand fabrics
//!
//! Configuration is loaded from ibtopology.toml in the working directory
//! unless another file is given with --config.

use clap::Parser;
use text_colorizer::Colorize;

use ibtopology::{execute, init_tracing, AppError, Cli, Config, Settings};

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config).unwrap_or_else(|e| fail(&e));
    let found = loaded.is_some();
    let settings = Settings::resolve(&cli, loaded.unwrap_or_default());

    init_tracing(&settings.log_level);
    if !found {
        tracing::info!("Config file not found at {:?}, using defaults", cli.config);
    }

    match execute(&settings) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}

fn fail(e: &AppError) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    std::process::exit(e.exit_code());
}
