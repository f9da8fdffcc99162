//! Assembly of the UPA proof bundle

use crate::errors::ConvertError;
use crate::key::{build_verifying_key, SourceVerifyingKey};
use crate::proof::RawProofFields;
use crate::types::{ProofBundle, PublicInputs, VerifyingKey};

/// Combine a decoded proof, its public inputs and the converted key.
///
/// Only structural completeness is checked here; whether the points are on
/// the curve is left to the verifier.
pub fn build_proof_bundle(
    decoded: &RawProofFields,
    inputs: PublicInputs,
    vk: VerifyingKey,
) -> Result<ProofBundle, ConvertError> {
    ProofBundle::try_new(decoded.to_proof(), vk, inputs)
}

/// Full conversion: decode the proof, parse the inputs and convert the key
///
/// * `proof` - encoded SP1 proof, with or without `0x`
/// * `program_vkey` / `public_values_digest` - hex or decimal text
pub fn convert(
    proof: &str,
    program_vkey: &str,
    public_values_digest: &str,
    source: &SourceVerifyingKey,
) -> Result<ProofBundle, ConvertError> {
    let decoded = RawProofFields::decode_prefixed(proof)?;
    let inputs = PublicInputs::parse(program_vkey, public_values_digest)?;
    let vk = build_verifying_key(source)?;
    build_proof_bundle(&decoded, inputs, vk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::sp1_v1_2_0_verifying_key;
    use crate::errors::{FieldError, ProofError};
    use crate::types::{FieldElement, G1Point};

    fn sample_proof_hex() -> String {
        let mut s = String::from("0xaabbccdd");
        for i in 1..=8u64 {
            s.push_str(&format!("{:064x}", i));
        }
        s
    }

    #[test]
    fn test_convert_sample() {
        let source = sp1_v1_2_0_verifying_key();
        let bundle = convert(&sample_proof_hex(), "3", "5", &source).unwrap();

        assert_eq!(
            bundle.inputs().to_vec(),
            vec![FieldElement::from_u64(3), FieldElement::from_u64(5)]
        );
        assert_eq!(bundle.vk(), &build_verifying_key(&source).unwrap());
        assert_eq!(
            bundle.proof().pi_c,
            G1Point::new(FieldElement::from_u64(7), FieldElement::from_u64(8))
        );
    }

    #[test]
    fn test_convert_hex_inputs() {
        let source = sp1_v1_2_0_verifying_key();
        let bundle = convert(&sample_proof_hex(), "0x03", "0x05", &source).unwrap();
        let json = serde_json::to_value(bundle.inputs()).unwrap();
        assert_eq!(json, serde_json::json!(["3", "5"]));
    }

    #[test]
    fn test_bundle_json_shape() {
        let source = sp1_v1_2_0_verifying_key();
        let bundle = convert(&sample_proof_hex(), "3", "5", &source).unwrap();
        let json = serde_json::to_value(&bundle).unwrap();

        assert_eq!(json["proof"]["pi_a"], serde_json::json!(["1", "2"]));
        assert_eq!(
            json["proof"]["pi_b"],
            serde_json::json!([["4", "3"], ["6", "5"]])
        );
        assert_eq!(json["proof"]["m"], serde_json::json!([]));
        assert_eq!(json["proof"]["pok"], serde_json::json!([]));
        assert_eq!(json["vk"]["h1"], serde_json::json!([]));
        assert_eq!(json["vk"]["h2"], serde_json::json!([]));
        assert_eq!(json["vk"]["s"].as_array().unwrap().len(), 3);
        assert_eq!(json["inputs"], serde_json::json!(["3", "5"]));
    }

    #[test]
    fn test_bundle_round_trip() {
        let source = sp1_v1_2_0_verifying_key();
        let bundle = convert(&sample_proof_hex(), "3", "5", &source).unwrap();
        let text = serde_json::to_string_pretty(&bundle).unwrap();
        let back: ProofBundle = serde_json::from_str(&text).unwrap();
        assert_eq!(back, bundle);
    }

    #[test]
    fn test_deserialize_checks_input_count() {
        let source = sp1_v1_2_0_verifying_key();
        let bundle = convert(&sample_proof_hex(), "3", "5", &source).unwrap();
        let mut json = serde_json::to_value(&bundle).unwrap();
        json["vk"]["s"].as_array_mut().unwrap().truncate(2);

        let err = serde_json::from_value::<ProofBundle>(json).unwrap_err();
        assert!(err.to_string().contains("Public input count mismatch"));
    }

    #[test]
    fn test_convert_malformed_proof() {
        let source = sp1_v1_2_0_verifying_key();
        let err = convert("0xaabbccdd", "3", "5", &source).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedProof(ProofError::InvalidLength { actual: 8, .. })
        ));
    }

    #[test]
    fn test_convert_bad_input() {
        let source = sp1_v1_2_0_verifying_key();
        let err = convert(&sample_proof_hex(), "three", "5", &source).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidFieldElement(FieldError::NotUnsigned(_))
        ));
    }

    #[test]
    fn test_input_count_mismatch() {
        let source = sp1_v1_2_0_verifying_key();
        let mut vk = build_verifying_key(&source).unwrap();
        vk.s.truncate(2);
        let decoded = RawProofFields::decode_prefixed(&sample_proof_hex()).unwrap();
        let inputs = PublicInputs::parse("3", "5").unwrap();
        assert!(matches!(
            build_proof_bundle(&decoded, inputs, vk),
            Err(ConvertError::InputCountMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }
}
