//! Error types for the miner and its command line collaborators.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("Minimum support must be in range (0,1], got {0}")]
    InvalidMinSupport(f64),

    #[error("Transaction {transaction} contains item 0; items must be positive identifiers")]
    NonPositiveItem { transaction: usize },

    #[error("Line {line}: {token:?} is not a positive integer item")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AprioriError>;
