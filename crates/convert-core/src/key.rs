//! Verifying key conversion
//!
//! SP1's Groth16Verifier.sol stores beta, gamma and delta already negated
//! (`-beta`, `-gamma`, `-delta`) so that the pairing check can be a single
//! product. UPA expects the plain points. Negating a G2 point in affine form
//! negates its y coordinate, so undoing the convention means negating both
//! y components and leaving x as is. Alpha and the IC points are stored plain
//! and pass through unchanged.

use crate::errors::KeyError;
use crate::field::fq_neg;
use crate::types::{Fq2, G1Point, G2Point, VerifyingKey};

/// Verifying key as published in the SP1 verifier contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVerifyingKey {
    pub alpha: G1Point,
    /// `-beta`
    pub beta_neg: G2Point,
    /// `-gamma`
    pub gamma_neg: G2Point,
    /// `-delta`
    pub delta_neg: G2Point,
    /// Constant term followed by one point per public input
    pub ic: Vec<G1Point>,
    pub num_public_inputs: usize,
}

/// Turn `-P` back into `P` for a G2 point: negate y, keep x.
pub fn undo_g2_negation(point: &G2Point) -> G2Point {
    G2Point::new(
        point.x.clone(),
        Fq2::new(fq_neg(&point.y.c0), fq_neg(&point.y.c1)),
    )
}

/// Build the UPA verifying key from the SP1 contract constants
pub fn build_verifying_key(source: &SourceVerifyingKey) -> Result<VerifyingKey, KeyError> {
    let expected = source.num_public_inputs + 1;
    if source.ic.len() != expected {
        return Err(KeyError::CommitmentCount {
            expected,
            actual: source.ic.len(),
        });
    }

    Ok(VerifyingKey {
        alpha: source.alpha.clone(),
        beta: undo_g2_negation(&source.beta_neg),
        gamma: undo_g2_negation(&source.gamma_neg),
        delta: undo_g2_negation(&source.delta_neg),
        s: source.ic.clone(),
        h1: Vec::new(),
        h2: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::sp1_v1_2_0_verifying_key;
    use crate::field::fq_modulus;
    use crate::types::FieldElement;

    fn fe(s: &str) -> FieldElement {
        s.parse().unwrap()
    }

    #[test]
    fn test_undo_g2_negation_keeps_x() {
        let p = G2Point::new(
            Fq2::new(FieldElement::from_u64(4), FieldElement::from_u64(3)),
            Fq2::new(FieldElement::from_u64(6), FieldElement::from_u64(5)),
        );
        let q = undo_g2_negation(&p);
        assert_eq!(q.x, p.x);
        let modulus = fq_modulus();
        assert_eq!(q.y.c0, FieldElement::from(modulus.as_biguint() - 6u32));
        assert_eq!(q.y.c1, FieldElement::from(modulus.as_biguint() - 5u32));
    }

    #[test]
    fn test_undo_g2_negation_is_involution() {
        let source = sp1_v1_2_0_verifying_key();
        for p in [&source.beta_neg, &source.gamma_neg, &source.delta_neg] {
            assert_eq!(&undo_g2_negation(&undo_g2_negation(p)), p);
        }
    }

    #[test]
    fn test_sp1_v1_2_0_key_conversion() {
        let source = sp1_v1_2_0_verifying_key();
        let vk = build_verifying_key(&source).unwrap();

        // alpha passes through
        assert_eq!(vk.alpha, source.alpha);

        // x components pass through
        assert_eq!(vk.beta.x, source.beta_neg.x);
        assert_eq!(vk.gamma.x, source.gamma_neg.x);
        assert_eq!(vk.delta.x, source.delta_neg.x);

        // y components are re-negated (values computed independently)
        assert_eq!(
            vk.beta.y.c0,
            fe("13408381768310724255446552085904771290233580259204657000846635219942429585904")
        );
        assert_eq!(
            vk.beta.y.c1,
            fe("20254719536233836527091806328845885055350800308541633786561075464689127466132")
        );
        assert_eq!(
            vk.gamma.y.c0,
            fe("10567610146342804097894173071570776368084417244117990855918003716013941316467")
        );
        assert_eq!(
            vk.gamma.y.c1,
            fe("21576347204082441465753305990075118034261494557676534163704117448826611743838")
        );
        assert_eq!(
            vk.delta.y.c0,
            fe("7222907075614013481922138890634881481068506286080434080579808010435708159492")
        );
        assert_eq!(
            vk.delta.y.c1,
            fe("17212320377336634683727304374264519945170594196781342004675871020482809452565")
        );

        assert_eq!(vk.s, source.ic);
        assert_eq!(vk.num_public_inputs(), 2);
        assert!(vk.h1.is_empty());
        assert!(vk.h2.is_empty());
    }

    #[test]
    fn test_commitment_count_mismatch() {
        let mut source = sp1_v1_2_0_verifying_key();
        source.ic.pop();
        assert_eq!(
            build_verifying_key(&source),
            Err(KeyError::CommitmentCount {
                expected: 3,
                actual: 2
            })
        );
    }
}
