//! Error types for the command line tool

use ibfabric::FabricError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    #[error("{reason}: \"{path}\"")]
    InputFile { path: String, reason: String },

    #[error("`{0}` couldn't be found")]
    CommandNotFound(String),

    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}\n\nThe error message was as follows:\n\n {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error(transparent)]
    Fabric(#[from] FabricError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile { .. } => 2,
            AppError::CommandNotFound(_) => 3,
            AppError::CommandSpawn { .. } | AppError::CommandFailed { .. } => 4,
            AppError::ConfigRead { .. }
            | AppError::ConfigParse { .. }
            | AppError::Fabric(_)
            | AppError::Json(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
