//! Core types for SP1 → UPA conversion
//!
//! Field elements are arbitrary-precision unsigned integers. Points use the
//! UPA JSON shape: G1 as `[x, y]`, G2 as `[[x.c0, x.c1], [y.c0, y.c1]]`, with
//! every coordinate written as a decimal string.

use crate::errors::{ConvertError, FieldError};
use core::fmt;
use core::str::FromStr;
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An unsigned big integer used as a BN254 base-field coordinate or public input.
///
/// Values are not reduced on construction; `field::fq_reduce` does that when
/// arithmetic needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_u64(val: u64) -> Self {
        Self(BigUint::from(val))
    }

    /// Interpret big-endian bytes as an unsigned integer
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Parse hex digits without a `0x` prefix
    pub fn from_hex(digits: &str) -> Result<Self, FieldError> {
        parse_radix(digits, 16)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// `0x`-prefixed hex, zero-padded to 32 bytes
    pub fn to_hex(&self) -> String {
        format!("0x{:0>64}", self.0.to_str_radix(16))
    }
}

impl From<BigUint> for FieldElement {
    fn from(val: BigUint) -> Self {
        Self(val)
    }
}

impl From<FieldElement> for BigUint {
    fn from(val: FieldElement) -> Self {
        val.0
    }
}

/// Accepts `0x`-prefixed hex or plain decimal.
impl FromStr for FieldElement {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => parse_radix(digits, 16),
            None => parse_radix(s, 10),
        }
    }
}

/// Decimal
impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn parse_radix(digits: &str, radix: u32) -> Result<FieldElement, FieldError> {
    if digits.is_empty() {
        return Err(FieldError::Empty);
    }
    // BigUint::from_str_radix tolerates '_' separators and a leading '+'
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(FieldError::NotUnsigned(digits.to_string()));
    }
    BigUint::from_str_radix(digits, radix)
        .map(FieldElement)
        .map_err(|_| FieldError::NotUnsigned(digits.to_string()))
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldElementVisitor;

        impl de::Visitor<'_> for FieldElementVisitor {
            type Value = FieldElement;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal or 0x-prefixed hex string, or an unsigned integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(FieldElement::from_u64(v))
            }
        }

        deserializer.deserialize_any(FieldElementVisitor)
    }
}

/// G1 affine point, serialized as `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[FieldElement; 2]", into = "[FieldElement; 2]")]
pub struct G1Point {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl G1Point {
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }
}

impl From<[FieldElement; 2]> for G1Point {
    fn from([x, y]: [FieldElement; 2]) -> Self {
        Self { x, y }
    }
}

impl From<G1Point> for [FieldElement; 2] {
    fn from(p: G1Point) -> Self {
        [p.x, p.y]
    }
}

/// Which extension-field component comes first in a raw encoding.
///
/// The SP1 proof lays G2 coordinates out as `(c1, c0)`; UPA expects `(c0, c1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentOrder {
    C0First,
    C1First,
}

/// Element of Fq2 = Fq[i], `c0 + c1·i`. Serialized as `[c0, c1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[FieldElement; 2]", into = "[FieldElement; 2]")]
pub struct Fq2 {
    pub c0: FieldElement,
    pub c1: FieldElement,
}

impl Fq2 {
    pub fn new(c0: FieldElement, c1: FieldElement) -> Self {
        Self { c0, c1 }
    }

    /// Build from two components as they appear in an encoding with the given order
    pub fn from_ordered(first: FieldElement, second: FieldElement, order: ComponentOrder) -> Self {
        match order {
            ComponentOrder::C0First => Self::new(first, second),
            ComponentOrder::C1First => Self::new(second, first),
        }
    }
}

impl From<[FieldElement; 2]> for Fq2 {
    fn from([c0, c1]: [FieldElement; 2]) -> Self {
        Self { c0, c1 }
    }
}

impl From<Fq2> for [FieldElement; 2] {
    fn from(e: Fq2) -> Self {
        [e.c0, e.c1]
    }
}

/// G2 affine point, serialized as `[[x.c0, x.c1], [y.c0, y.c1]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Fq2; 2]", into = "[Fq2; 2]")]
pub struct G2Point {
    pub x: Fq2,
    pub y: Fq2,
}

impl G2Point {
    pub fn new(x: Fq2, y: Fq2) -> Self {
        Self { x, y }
    }
}

impl From<[Fq2; 2]> for G2Point {
    fn from([x, y]: [Fq2; 2]) -> Self {
        Self { x, y }
    }
}

impl From<G2Point> for [Fq2; 2] {
    fn from(p: G2Point) -> Self {
        [p.x, p.y]
    }
}

/// UPA Groth16 verifying key
///
/// `h1` and `h2` are reserved for commitment-carrying circuits and are always
/// written, empty, for SP1 proofs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    pub alpha: G1Point,
    pub beta: G2Point,
    pub gamma: G2Point,
    pub delta: G2Point,
    /// Constant term followed by one point per public input
    pub s: Vec<G1Point>,
    pub h1: Vec<G2Point>,
    pub h2: Vec<G2Point>,
}

impl VerifyingKey {
    /// Number of public inputs this key accepts (`s.len() - 1`)
    pub fn num_public_inputs(&self) -> usize {
        self.s.len().saturating_sub(1)
    }
}

/// UPA Groth16 proof
///
/// `m` and `pok` are reserved for commitment-carrying circuits and are always
/// written, empty, for SP1 proofs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub pi_a: G1Point,
    pub pi_b: G2Point,
    pub pi_c: G1Point,
    pub m: Vec<G1Point>,
    pub pok: Vec<G1Point>,
}

/// Number of public inputs of an SP1 Groth16 proof
pub const NUM_PUBLIC_INPUTS: usize = 2;

/// SP1 public inputs in verifier order: `[program_vkey, public_values_digest]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldElement>", into = "Vec<FieldElement>")]
pub struct PublicInputs {
    pub program_vkey: FieldElement,
    pub public_values_digest: FieldElement,
}

impl PublicInputs {
    pub fn new(program_vkey: FieldElement, public_values_digest: FieldElement) -> Self {
        Self {
            program_vkey,
            public_values_digest,
        }
    }

    /// Parse both values from their fixture text (hex or decimal)
    pub fn parse(program_vkey: &str, public_values_digest: &str) -> Result<Self, FieldError> {
        Ok(Self::new(
            program_vkey.parse()?,
            public_values_digest.parse()?,
        ))
    }

    pub fn len(&self) -> usize {
        NUM_PUBLIC_INPUTS
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_vec(&self) -> Vec<FieldElement> {
        vec![self.program_vkey.clone(), self.public_values_digest.clone()]
    }
}

impl TryFrom<Vec<FieldElement>> for PublicInputs {
    type Error = ConvertError;

    fn try_from(values: Vec<FieldElement>) -> Result<Self, Self::Error> {
        let actual = values.len();
        match <[FieldElement; NUM_PUBLIC_INPUTS]>::try_from(values) {
            Ok([program_vkey, public_values_digest]) => {
                Ok(Self::new(program_vkey, public_values_digest))
            }
            Err(_) => Err(ConvertError::InputCountMismatch {
                expected: NUM_PUBLIC_INPUTS,
                actual,
            }),
        }
    }
}

impl From<PublicInputs> for Vec<FieldElement> {
    fn from(inputs: PublicInputs) -> Self {
        vec![inputs.program_vkey, inputs.public_values_digest]
    }
}

/// Proof, verifying key and public inputs for one UPA submission.
///
/// Read-only once built. Deserializing goes through the same input count
/// check as `bundle::build_proof_bundle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofBundle {
    proof: Proof,
    vk: VerifyingKey,
    inputs: PublicInputs,
}

impl ProofBundle {
    /// The key must carry one commitment point per public input plus the
    /// constant term.
    pub(crate) fn try_new(
        proof: Proof,
        vk: VerifyingKey,
        inputs: PublicInputs,
    ) -> Result<Self, ConvertError> {
        if vk.s.len() != inputs.len() + 1 {
            return Err(ConvertError::InputCountMismatch {
                expected: vk.num_public_inputs(),
                actual: inputs.len(),
            });
        }
        Ok(Self { proof, vk, inputs })
    }

    pub fn proof(&self) -> &Proof {
        &self.proof
    }

    pub fn vk(&self) -> &VerifyingKey {
        &self.vk
    }

    pub fn inputs(&self) -> &PublicInputs {
        &self.inputs
    }
}

impl<'de> Deserialize<'de> for ProofBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts {
            proof: Proof,
            vk: VerifyingKey,
            inputs: PublicInputs,
        }

        let parts = Parts::deserialize(deserializer)?;
        Self::try_new(parts.proof, parts.vk, parts.inputs).map_err(de::Error::custom)
    }
}
