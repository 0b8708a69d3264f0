//! Effective settings: command line over config file over defaults

use ibfabric::RenderOptions;

use crate::cli::Cli;
use crate::config::Config;
use crate::source::ReportSource;

/// Everything a run needs, resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: ReportSource,
    pub dump: bool,
    pub render: RenderOptions,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let source = match &cli.input_file {
            Some(path) => ReportSource::File(path.clone()),
            None => ReportSource::Command {
                program: cli
                    .ibnetdiscover_path
                    .clone()
                    .unwrap_or_else(|| config.discovery.path.into()),
                args: match &cli.ibnetdiscover_args {
                    Some(args) => args.split_whitespace().map(str::to_string).collect(),
                    None => config.discovery.args,
                },
            },
        };

        Self {
            source,
            dump: cli.dump,
            render: RenderOptions {
                prefix: cli.prefix.clone().unwrap_or(config.output.prefix),
                nodes_only: match (cli.nodes_only, cli.with_switches) {
                    (true, _) => true,
                    (_, true) => false,
                    _ => config.output.nodes_only,
                },
            },
            log_level: cli.log_level.clone().unwrap_or(config.logging.level),
        }
    }
}
