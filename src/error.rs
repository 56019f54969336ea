// src/error.rs
//
// Crate-wide error type. Every failure here is a programming contract
// violation detected synchronously; nothing is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RainbowError {
    /// The input values break the uniqueness invariant (or are not finite).
    #[error("invariant violation: value {value} at index {index} {reason}")]
    InvariantViolation {
        index: usize,
        value: f32,
        reason: String,
    },

    #[error("cannot animate an empty array")]
    EmptyInput,

    /// A step algorithm returned an array whose length differs from the tracked one.
    #[error("contract violation: step returned {actual} values, expected {expected}")]
    ContractViolation { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
