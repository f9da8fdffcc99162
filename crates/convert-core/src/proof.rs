//! Proof decoding for SP1 Groth16 (verifier v1.2.0)
//!
//! ## Encoded Proof Format
//!
//! SP1 hands out Groth16 proofs as the calldata expected by
//! `SP1Verifier.verifyProof`, hex encoded:
//!
//! | hex offset | length | field |
//! |-----------:|-------:|-------|
//! | 0   | 8  | verifier selector (first 4 bytes of the verifier hash) |
//! | 8   | 64 | A.x |
//! | 72  | 64 | A.y |
//! | 136 | 64 | B.x1 |
//! | 200 | 64 | B.x0 |
//! | 264 | 64 | B.y1 |
//! | 328 | 64 | B.y0 |
//! | 392 | 64 | C.x |
//! | 456 | 64 | C.y |
//!
//! Total: 520 hex chars (260 bytes)
//!
//! B's coordinates are written with the `i` component first, which is what the
//! EVM pairing precompile expects. UPA wants the real component first.

use crate::errors::ProofError;
use crate::types::{ComponentOrder, FieldElement, Fq2, G1Point, G2Point, Proof};

/// Length of the verifier selector in hex chars (4 bytes)
pub const SELECTOR_HEX_LEN: usize = 8;

/// Length of one field element in hex chars (32 bytes)
pub const FIELD_HEX_LEN: usize = 64;

/// Number of field elements in the proof (A: 2, B: 4, C: 2)
pub const NUM_PROOF_FIELDS: usize = 8;

/// Expected encoded proof length in hex chars, without `0x`
pub const EXPECTED_PROOF_HEX_LEN: usize = SELECTOR_HEX_LEN + NUM_PROOF_FIELDS * FIELD_HEX_LEN;

/// Component order of B's coordinates in the encoded proof
pub const PROOF_G2_ORDER: ComponentOrder = ComponentOrder::C1First;

/// Proof fields as laid out in the encoded proof, before any reordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProofFields {
    pub selector: [u8; 4],
    pub a_x: FieldElement,
    pub a_y: FieldElement,
    pub b_x1: FieldElement,
    pub b_x0: FieldElement,
    pub b_y1: FieldElement,
    pub b_y0: FieldElement,
    pub c_x: FieldElement,
    pub c_y: FieldElement,
}

/// Reads fixed-width segments off the front of an already validated hex string
struct HexCursor<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> HexCursor<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> &'a str {
        let segment = &self.data[self.pos..self.pos + len];
        self.pos += len;
        segment
    }

    fn take_field(&mut self) -> Result<FieldElement, ProofError> {
        let offset = self.pos;
        let segment = self.take(FIELD_HEX_LEN);
        FieldElement::from_hex(segment).map_err(|_| ProofError::InvalidHex { offset })
    }
}

impl RawProofFields {
    /// Decode an encoded proof (hex, no `0x` prefix)
    ///
    /// The input must be exactly `EXPECTED_PROOF_HEX_LEN` chars; nothing is
    /// truncated or padded.
    pub fn decode(raw_hex: &str) -> Result<Self, ProofError> {
        if raw_hex.len() != EXPECTED_PROOF_HEX_LEN {
            return Err(ProofError::InvalidLength {
                expected: EXPECTED_PROOF_HEX_LEN,
                actual: raw_hex.len(),
            });
        }
        if let Some(offset) = raw_hex.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(ProofError::InvalidHex { offset });
        }

        let mut cursor = HexCursor::new(raw_hex);

        let mut selector = [0u8; 4];
        hex::decode_to_slice(cursor.take(SELECTOR_HEX_LEN), &mut selector)
            .map_err(|_| ProofError::InvalidHex { offset: 0 })?;

        let a_x = cursor.take_field()?;
        let a_y = cursor.take_field()?;
        let b_x1 = cursor.take_field()?;
        let b_x0 = cursor.take_field()?;
        let b_y1 = cursor.take_field()?;
        let b_y0 = cursor.take_field()?;
        let c_x = cursor.take_field()?;
        let c_y = cursor.take_field()?;

        debug_assert_eq!(cursor.pos, EXPECTED_PROOF_HEX_LEN);

        Ok(RawProofFields {
            selector,
            a_x,
            a_y,
            b_x1,
            b_x0,
            b_y1,
            b_y0,
            c_x,
            c_y,
        })
    }

    /// Decode a proof that may carry a `0x` prefix, as stored in SP1 fixtures
    pub fn decode_prefixed(proof: &str) -> Result<Self, ProofError> {
        let raw = proof
            .strip_prefix("0x")
            .or_else(|| proof.strip_prefix("0X"))
            .unwrap_or(proof);
        Self::decode(raw)
    }

    /// Verifier selector as lowercase hex (no prefix)
    pub fn selector_hex(&self) -> String {
        hex::encode(self.selector)
    }

    /// Check the proof was produced for the verifier with the given selector
    pub fn check_selector(&self, expected: &[u8; 4]) -> Result<(), ProofError> {
        if &self.selector != expected {
            return Err(ProofError::SelectorMismatch {
                expected: hex::encode(expected),
                actual: self.selector_hex(),
            });
        }
        Ok(())
    }

    /// A as a G1 point
    pub fn a(&self) -> G1Point {
        G1Point::new(self.a_x.clone(), self.a_y.clone())
    }

    /// B as a G2 point in `(c0, c1)` order
    pub fn b(&self) -> G2Point {
        G2Point::new(
            Fq2::from_ordered(self.b_x1.clone(), self.b_x0.clone(), PROOF_G2_ORDER),
            Fq2::from_ordered(self.b_y1.clone(), self.b_y0.clone(), PROOF_G2_ORDER),
        )
    }

    /// C as a G1 point
    pub fn c(&self) -> G1Point {
        G1Point::new(self.c_x.clone(), self.c_y.clone())
    }

    /// UPA proof with empty commitment slots
    pub fn to_proof(&self) -> Proof {
        Proof {
            pi_a: self.a(),
            pi_b: self.b(),
            pi_c: self.c(),
            m: Vec::new(),
            pok: Vec::new(),
        }
    }
}

/// Parse a `0x`-prefixed or bare 4-byte selector
pub fn parse_selector(s: &str) -> Result<[u8; 4], ProofError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() != SELECTOR_HEX_LEN {
        return Err(ProofError::InvalidLength {
            expected: SELECTOR_HEX_LEN,
            actual: digits.len(),
        });
    }
    let mut selector = [0u8; 4];
    hex::decode_to_slice(digits, &mut selector).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => {
            ProofError::InvalidHex { offset: index }
        }
        _ => ProofError::InvalidHex { offset: 0 },
    })?;
    Ok(selector)
}
