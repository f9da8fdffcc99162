//! Rust SDK for converting SP1 Groth16 proofs into UPA submissions
//!
//! This crate wraps `sp1-upa-core` with the file handling around it: loading
//! SP1 proof fixtures and writing the UPA verifying key and
//! proof/key/inputs bundle as JSON.
//!
//! # Example
//!
//! ```no_run
//! use sp1_upa_sdk::{ConverterConfig, Sp1ToUpaConverter};
//!
//! let converter = Sp1ToUpaConverter::new(
//!     ConverterConfig::new("fixtures").with_bundle_file_name("upaProofVkInputs.json"),
//! );
//!
//! let result = converter.convert_file("fixtures/sp1FibonacciProofFixture.json")?;
//! println!("Selector: 0x{}", result.selector);
//! println!("Bundle: {:?}", result.bundle_path);
//! # Ok::<(), sp1_upa_sdk::ConverterError>(())
//! ```

mod client;
mod error;
pub mod fixture;
pub mod output;
mod types;

pub use client::Sp1ToUpaConverter;
pub use error::{ConverterError, Result};
pub use fixture::{load_fixture, Sp1ProofFixture};
pub use types::*;
