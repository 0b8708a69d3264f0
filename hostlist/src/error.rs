//! Error types for hostlist expansion

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostlistError {
    #[error("Unbalanced bracket in '{0}'")]
    UnbalancedBracket(String),

    #[error("Empty range in '{0}'")]
    EmptyRange(String),

    #[error("Invalid range bound '{bound}' in '{item}'")]
    InvalidBound { item: String, bound: String },

    #[error("Reversed range {low}-{high} in '{item}'")]
    ReversedRange { item: String, low: u64, high: u64 },
}

pub type Result<T> = std::result::Result<T, HostlistError>;
