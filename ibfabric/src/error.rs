//! Error types for report parsing

use thiserror::Error;

/// Why a header or port line could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected 4 quote delimiters, found {0}")]
    MissingQuotedFields(usize),

    #[error("no 'lid' token in trailing segment")]
    MissingLid,

    #[error("invalid LID '{0}'")]
    InvalidLid(String),

    #[error("no port count before first quoted field")]
    MissingPortCount,

    #[error("invalid port count '{0}'")]
    InvalidPortCount(String),

    #[error("empty host description")]
    EmptyHostName,
}

/// Fatal report errors. Parsing stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FabricError {
    #[error("Malformed switch header at line {line_no}: {reason}: {line:?}")]
    MalformedHeader {
        line_no: usize,
        line: String,
        reason: FieldError,
    },

    #[error("Malformed port entry at line {line_no}: {reason}: {line:?}")]
    MalformedPort {
        line_no: usize,
        line: String,
        reason: FieldError,
    },
}

impl FabricError {
    /// 1-based line number of the offending input line
    pub fn line_no(&self) -> usize {
        match self {
            FabricError::MalformedHeader { line_no, .. }
            | FabricError::MalformedPort { line_no, .. } => *line_no,
        }
    }
}

pub type Result<T> = std::result::Result<T, FabricError>;
