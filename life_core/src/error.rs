// error.rs - Error types for the simulation engine

use thiserror::Error;

/// Errors raised by the engine and its pattern stores.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid size or tick rate rejected before anything was built.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No saved pattern carries the requested identifier.
    #[error("pattern not found: {0}")]
    PatternNotFound(u32),

    /// The pattern store returned data that is not a valid record collection.
    #[error("pattern store corrupt: {0}")]
    StoreCorrupt(String),

    /// A stored pattern does not match the configured grid size.
    #[error("pattern is {found}x{found}, grid is {expected}x{expected}")]
    PatternSizeMismatch { expected: usize, found: usize },

    /// Reading or writing the backing file failed.
    #[error("pattern store i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
