//! Types and constants for the SP1 → UPA converter SDK

use sp1_upa_core::{ProofBundle, VerifyingKey};
use std::path::PathBuf;

/// Configuration for the converter client
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory the output files are written to
    pub output_dir: PathBuf,
    /// File name of the UPA verifying key (default: upaVk.json)
    pub vk_file_name: String,
    /// File name of the proof/vk/inputs bundle (default: upaProofVkInputs.json)
    pub bundle_file_name: String,
    /// Reject proofs whose verifier selector differs from this one
    pub expected_selector: Option<[u8; 4]>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl ConverterConfig {
    /// Create a new config with default file names
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            vk_file_name: DEFAULT_VK_FILE_NAME.to_string(),
            bundle_file_name: DEFAULT_BUNDLE_FILE_NAME.to_string(),
            expected_selector: None,
        }
    }

    /// Set custom verifying key file name
    pub fn with_vk_file_name(mut self, name: impl Into<String>) -> Self {
        self.vk_file_name = name.into();
        self
    }

    /// Set custom bundle file name
    pub fn with_bundle_file_name(mut self, name: impl Into<String>) -> Self {
        self.bundle_file_name = name.into();
        self
    }

    /// Require a specific verifier selector
    pub fn with_expected_selector(mut self, selector: [u8; 4]) -> Self {
        self.expected_selector = Some(selector);
        self
    }

    pub fn vk_path(&self) -> PathBuf {
        self.output_dir.join(&self.vk_file_name)
    }

    pub fn bundle_path(&self) -> PathBuf {
        self.output_dir.join(&self.bundle_file_name)
    }
}

/// In-memory result of converting one fixture
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Verifier selector found in the proof, lowercase hex
    pub selector: String,
    pub vk: VerifyingKey,
    pub bundle: ProofBundle,
}

/// Result of a conversion written to disk
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub vk_path: PathBuf,
    pub bundle_path: PathBuf,
    /// Verifier selector found in the proof, lowercase hex
    pub selector: String,
    pub num_public_inputs: usize,
}

// =============================================================================
// Defaults matching the fixture layout of SP1 project templates
// =============================================================================

/// Default fixture location
pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/sp1FibonacciProofFixture.json";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "fixtures";

/// Default verifying key file name
pub const DEFAULT_VK_FILE_NAME: &str = "upaVk.json";

/// Default bundle file name
pub const DEFAULT_BUNDLE_FILE_NAME: &str = "upaProofVkInputs.json";
