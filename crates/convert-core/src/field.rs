//! Base field arithmetic for BN254
//!
//! Only what the conversion needs: reduction and additive negation modulo the
//! base-field prime q. Inputs may be of any magnitude.

use crate::types::FieldElement;
use hex_literal::hex;

/// BN254 base field modulus (q), big-endian
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const FQ_MODULUS: [u8; 32] =
    hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

/// q as a field element
pub fn fq_modulus() -> FieldElement {
    FieldElement::from_be_bytes(&FQ_MODULUS)
}

/// Reduce a value mod q
pub fn fq_reduce(a: &FieldElement) -> FieldElement {
    let q = fq_modulus();
    FieldElement::from(a.as_biguint() % q.as_biguint())
}

/// Negate a value: the unique x in [0, q) with a + x ≡ 0 (mod q)
///
/// Same rule as `negate` in SP1's Groth16Verifier.sol: `(q - (a mod q)) mod q`,
/// so zero (and every multiple of q) maps to zero.
pub fn fq_neg(a: &FieldElement) -> FieldElement {
    let q = fq_modulus();
    let q = q.as_biguint();
    let reduced = a.as_biguint() % q;
    FieldElement::from((q - reduced) % q)
}
