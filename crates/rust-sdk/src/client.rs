//! Main client for converting SP1 proof fixtures into UPA submissions

use crate::{
    error::Result,
    fixture::{load_fixture, Sp1ProofFixture},
    output,
    types::*,
};
use sp1_upa_core::{
    build_proof_bundle, build_verifying_key, constants, ConvertError, PublicInputs,
    RawProofFields, SourceVerifyingKey, VerifyingKey,
};
use std::path::{Path, PathBuf};

/// Client for converting SP1 Groth16 fixtures
///
/// # Example
///
/// ```no_run
/// use sp1_upa_sdk::{ConverterConfig, Sp1ToUpaConverter};
///
/// let converter = Sp1ToUpaConverter::new(ConverterConfig::new("fixtures"));
/// let result = converter.convert_file("fixtures/sp1FibonacciProofFixture.json")?;
/// println!("Wrote {:?}", result.bundle_path);
/// # Ok::<(), sp1_upa_sdk::ConverterError>(())
/// ```
pub struct Sp1ToUpaConverter {
    config: ConverterConfig,
    source_vk: SourceVerifyingKey,
}

impl Sp1ToUpaConverter {
    /// Create a converter for the SP1 v1.2.0 verifier key
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_source_key(config, constants::sp1_v1_2_0_verifying_key())
    }

    /// Create a converter for a different SP1 verifier key
    pub fn with_source_key(config: ConverterConfig, source_vk: SourceVerifyingKey) -> Self {
        Self { config, source_vk }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// UPA verifying key for the configured SP1 verifier
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        Ok(build_verifying_key(&self.source_vk).map_err(ConvertError::from)?)
    }

    /// Decode the fixture's proof without converting anything else
    pub fn decode_proof(&self, fixture: &Sp1ProofFixture) -> Result<RawProofFields> {
        let decoded =
            RawProofFields::decode_prefixed(&fixture.proof).map_err(ConvertError::from)?;
        log::debug!("Verifier selector: 0x{}", decoded.selector_hex());

        if let Some(expected) = &self.config.expected_selector {
            decoded
                .check_selector(expected)
                .map_err(ConvertError::from)?;
        }
        Ok(decoded)
    }

    /// Convert a fixture in memory
    pub fn convert_fixture(&self, fixture: &Sp1ProofFixture) -> Result<Conversion> {
        let decoded = self.decode_proof(fixture)?;
        let inputs = PublicInputs::parse(&fixture.vkey, &fixture.public_values_digest)
            .map_err(ConvertError::from)?;
        let vk = self.verifying_key()?;
        let bundle = build_proof_bundle(&decoded, inputs, vk.clone())?;

        Ok(Conversion {
            selector: decoded.selector_hex(),
            vk,
            bundle,
        })
    }

    /// Load a fixture, convert it, and write both output files
    pub fn convert_file(&self, fixture_path: impl AsRef<Path>) -> Result<ConversionResult> {
        let fixture_path = fixture_path.as_ref();
        log::info!("Generating UPA proof file from SP1 fixture {:?}", fixture_path);

        let fixture = load_fixture(fixture_path)?;
        let conversion = self.convert_fixture(&fixture)?;
        let (vk_path, bundle_path) =
            output::write_outputs(&self.config, &conversion.vk, &conversion.bundle)?;

        log::info!("Wrote UPA verifying key to {:?}", vk_path);
        log::info!("Wrote UPA proof, key and inputs to {:?}", bundle_path);

        Ok(ConversionResult {
            vk_path,
            bundle_path,
            selector: conversion.selector,
            num_public_inputs: conversion.bundle.inputs().len(),
        })
    }

    /// Write only the UPA verifying key
    pub fn write_verifying_key(&self) -> Result<PathBuf> {
        let vk = self.verifying_key()?;
        let path = output::write_verifying_key(&self.config, &vk)?;
        log::info!("Wrote UPA verifying key to {:?}", path);
        Ok(path)
    }
}
