//! Error types for the SP1 → UPA converter SDK

use sp1_upa_core::ConvertError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a fixture
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Failed to read fixture {path:?}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture {path:?}: {source}")]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),
}

pub type Result<T> = std::result::Result<T, ConverterError>;
