//! Conversion of SP1 Groth16 proofs into the UPA Groth16 format
//!
//! SP1 proofs come as packed calldata for the SP1 verifier contract, and that
//! contract's verifying key keeps beta, gamma and delta negated. UPA wants
//! plain JSON points with G2 coordinates in `(c0, c1)` order and the key in
//! its un-negated form. This crate does that conversion and nothing else:
//! no I/O, no curve arithmetic beyond negation in the base field.
//!
//! ```
//! use sp1_upa_core::{constants::sp1_v1_2_0_verifying_key, convert};
//!
//! let mut proof = String::from("0xaabbccdd");
//! for i in 1..=8u64 {
//!     proof.push_str(&format!("{:064x}", i));
//! }
//! let bundle = convert(&proof, "3", "5", &sp1_v1_2_0_verifying_key()).unwrap();
//! assert_eq!(bundle.proof().pi_a.x.to_string(), "1");
//! ```

pub mod bundle;
pub mod constants;
pub mod errors;
pub mod field;
pub mod key;
pub mod proof;
pub mod types;

pub use bundle::{build_proof_bundle, convert};
pub use errors::{ConvertError, FieldError, KeyError, ProofError};
pub use key::{build_verifying_key, undo_g2_negation, SourceVerifyingKey};
pub use proof::RawProofFields;
pub use types::*;
