//! Where the discovery report comes from

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::error::{AppError, Result};

pub const DEFAULT_IBNETDISCOVER: &str = "/usr/sbin/ibnetdiscover";

/// A discovery report on disk or produced by running `ibnetdiscover`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    File(PathBuf),
    Command { program: PathBuf, args: Vec<String> },
}

impl ReportSource {
    /// Reads the whole report
    pub fn read(&self) -> Result<String> {
        match self {
            ReportSource::File(path) => {
                info!("Reading report from {:?}", path);
                let bytes = std::fs::read(path).map_err(|e| AppError::InputFile {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                // Same decoding as captured program output
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            ReportSource::Command { program, args } => run_discovery(program, args),
        }
    }

    /// Human readable origin, for messages
    pub fn describe(&self) -> String {
        match self {
            ReportSource::File(path) => path.display().to_string(),
            ReportSource::Command { program, args } => command_line(program, args),
        }
    }
}

fn command_line(program: &Path, args: &[String]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_discovery(program: &Path, args: &[String]) -> Result<String> {
    let command = command_line(program, args);
    info!("Running `{}`", command);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => AppError::CommandNotFound(command.clone()),
            _ => AppError::CommandSpawn {
                command: command.clone(),
                source,
            },
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        return Err(AppError::CommandFailed {
            command,
            status: output.status.to_string(),
            output: format!("{stdout}{stderr}"),
        });
    }
    if !stderr.trim().is_empty() {
        warn!("`{}` wrote to stderr: {}", command, stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
