//! Error types for the SP1 → UPA conversion

use thiserror::Error;

/// Top-level conversion error
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Malformed proof: {0}")]
    MalformedProof(#[from] ProofError),

    #[error("Invalid field element: {0}")]
    InvalidFieldElement(#[from] FieldError),

    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Public input count mismatch: verifying key expects {expected}, got {actual}")]
    InputCountMismatch { expected: usize, actual: usize },
}

/// Raw proof decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProofError {
    #[error("Invalid proof length: expected {expected} hex chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Non-hex character at offset {offset}")]
    InvalidHex { offset: usize },

    #[error("Verifier selector mismatch: expected 0x{expected}, got 0x{actual}")]
    SelectorMismatch { expected: String, actual: String },
}

/// Textual field element parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Empty value")]
    Empty,

    #[error("Not an unsigned integer: {0:?}")]
    NotUnsigned(String),
}

/// Verifying key construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid commitment count: expected {expected} (public inputs + 1), got {actual}")]
    CommitmentCount { expected: usize, actual: usize },
}
