//! SP1 proof fixtures
//!
//! The JSON written by SP1's fixture generators (`sp1FibonacciProofFixture.json`
//! and friends). Only `vkey`, `publicValuesDigest` and `proof` are needed for
//! conversion; the program inputs are kept when present so they can be shown.

use crate::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sp1ProofFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u64>,
    /// Program verifying key hash (hex or decimal)
    pub vkey: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_values: Option<String>,
    /// Digest of the public values (hex or decimal)
    pub public_values_digest: String,
    /// Encoded Groth16 proof, `0x`-prefixed hex
    pub proof: String,
}

impl Sp1ProofFixture {
    /// Parse a fixture from JSON text. `origin` is only used in errors.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ConverterError::FixtureParse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// Read and parse a fixture file
pub fn load_fixture(path: impl AsRef<Path>) -> Result<Sp1ProofFixture> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ConverterError::FixtureIo {
        path: path.to_path_buf(),
        source,
    })?;
    let fixture = Sp1ProofFixture::from_json(&json, path)?;
    log::debug!("Loaded fixture {:?} (vkey {})", path, fixture.vkey);
    Ok(fixture)
}
