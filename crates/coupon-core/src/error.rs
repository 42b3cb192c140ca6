use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing coupon codes.
pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("entropy source failed: {0}")]
    Entropy(String),
    #[error("code length {length} exceeds the maximum of {max}")]
    LengthTooLarge { length: usize, max: usize },
    #[error(
        "code space exhausted: wanted {quantity} distinct codes of length {length}, \
         capacity is {}, gave up after {attempts} attempts",
        display_capacity(.capacity)
    )]
    CodeSpaceExhausted {
        quantity: usize,
        length: usize,
        /// `None` when the code space does not fit in a `u128`.
        capacity: Option<u128>,
        attempts: usize,
    },
}

fn display_capacity(capacity: &Option<u128>) -> String {
    capacity.map_or_else(|| "unbounded".to_string(), |c| c.to_string())
}

/// Errors raised while loading a [`GenerationConfig`](crate::GenerationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] ::config::ConfigError),
    #[error("missing configuration key: {0}")]
    KeyMissing(&'static str),
    #[error("invalid value for {key}: {value:?} ({reason})")]
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
