//! SP1 Groth16 verifying key constants
//!
//! Copied from SP1's Groth16Verifier.sol v1.2.0 and stored as 32-byte
//! big-endian words. A new verifier contract release comes with a new key, so
//! these must be republished alongside it.

use crate::key::SourceVerifyingKey;
use crate::types::{FieldElement, Fq2, G1Point, G2Point, NUM_PUBLIC_INPUTS};
use hex_literal::hex;

/// SP1 verifier contract release the constants below belong to
pub const SP1_VERIFIER_VERSION: &str = "v1.2.0";

// Groth16 alpha point in G1
const ALPHA_X: [u8; 32] = hex!("2532784eb9331a8b7acee80e5e941f050efdbdfa4b28677d01ad98f3ecebd13e");
const ALPHA_Y: [u8; 32] = hex!("19d4e81989ace8f20cc2793c8cdc1aa8a0c6ae595df8e5b8cad044baa8f67111");

// Groth16 beta point in G2 in powers of i (negated)
const BETA_NEG_X_0: [u8; 32] =
    hex!("0d4ac963b78b91429d5d0c4534f9fe5493d3411accd4d894fceed33f4ef0c0b1");
const BETA_NEG_X_1: [u8; 32] =
    hex!("0de8f097ec1a910b5c40bf1dbb070e4eb01240c269ed6d6421196d4e15dee769");
const BETA_NEG_Y_0: [u8; 32] =
    hex!("12bf6e699f3055557b29cfd9e3fabaacd1cc2fba5536e26975ff819dcc428b57");
const BETA_NEG_Y_1: [u8; 32] =
    hex!("039c8a9c09855dcfd2e4292273cf75cc0816ed475612c4e7255db164f991d8b3");

// Groth16 gamma point in G2 in powers of i (negated)
const GAMMA_NEG_X_0: [u8; 32] =
    hex!("0928c30680044b2ee8a0317a949e1ca4d17062504b30ac85eacb33a677ed1d90");
const GAMMA_NEG_X_1: [u8; 32] =
    hex!("277239c9d98a5e999c1856c84f05540a86696a5d8b3d68975faf8af742286bf2");
const GAMMA_NEG_Y_0: [u8; 32] =
    hex!("1907404559d12f9eea3f4ea7b687d32193ab79824c93828818e2bdb67e9121d4");
const GAMMA_NEG_Y_1: [u8; 32] =
    hex!("00b086d54acb43ea62111dc22e7547f753d1550e0e60c2fb5b7d292c2a2240e9");

// Groth16 delta point in G2 in powers of i (negated)
const DELTA_NEG_X_0: [u8; 32] =
    hex!("031945137210f1179473d48e78fb4b6e4460532d1a9d63d631ba7409e6d0d7dc");
const DELTA_NEG_X_1: [u8; 32] =
    hex!("2d607dbe189b63f10ec9b8feb0168610ae0e44812738677c9a90d8ed0f690695");
const DELTA_NEG_Y_0: [u8; 32] =
    hex!("206c49315f5f89813278cb4176b1aabb9bdb7d66200128d6e6757e9cea1f7743");
const DELTA_NEG_Y_1: [u8; 32] =
    hex!("0a567a74c478d33f2a91fdd39609da291a31b12cf39928763be50dd77d5ea532");

// Constant and public input points
const CONSTANT_X: [u8; 32] =
    hex!("125f86b8f05072082832868e9f344edc8393964fb3772aab87b499a1576a68a1");
const CONSTANT_Y: [u8; 32] =
    hex!("2f2fc8fb4a3d871123f5ec56e95789edc1332fe8afd2f83b6ae94a1d89c7403b");
const PUB_0_X: [u8; 32] = hex!("1453175db10a715beb24933f762d3b39e7cbbc8851a2f099e1ec61e13c8dd144");
const PUB_0_Y: [u8; 32] = hex!("02b8210f6b3bd267cab35bc71e0656fea8d6f4a0bd248de944276da4ca7ff625");
const PUB_1_X: [u8; 32] = hex!("149145ba3502d0e90843154371dadc5851136e048014d6be5ca67134a098176a");
const PUB_1_Y: [u8; 32] = hex!("19222d26f931086825b4b697211d583b519fe168b2b7913593ef0b5fdd345e38");

fn g1(x: &[u8; 32], y: &[u8; 32]) -> G1Point {
    G1Point::new(FieldElement::from_be_bytes(x), FieldElement::from_be_bytes(y))
}

fn g2(x0: &[u8; 32], x1: &[u8; 32], y0: &[u8; 32], y1: &[u8; 32]) -> G2Point {
    G2Point::new(
        Fq2::new(FieldElement::from_be_bytes(x0), FieldElement::from_be_bytes(x1)),
        Fq2::new(FieldElement::from_be_bytes(y0), FieldElement::from_be_bytes(y1)),
    )
}

/// The verifying key baked into SP1's Groth16Verifier.sol v1.2.0
pub fn sp1_v1_2_0_verifying_key() -> SourceVerifyingKey {
    SourceVerifyingKey {
        alpha: g1(&ALPHA_X, &ALPHA_Y),
        beta_neg: g2(&BETA_NEG_X_0, &BETA_NEG_X_1, &BETA_NEG_Y_0, &BETA_NEG_Y_1),
        gamma_neg: g2(&GAMMA_NEG_X_0, &GAMMA_NEG_X_1, &GAMMA_NEG_Y_0, &GAMMA_NEG_Y_1),
        delta_neg: g2(&DELTA_NEG_X_0, &DELTA_NEG_X_1, &DELTA_NEG_Y_0, &DELTA_NEG_Y_1),
        ic: vec![
            g1(&CONSTANT_X, &CONSTANT_Y),
            g1(&PUB_0_X, &PUB_0_Y),
            g1(&PUB_1_X, &PUB_1_Y),
        ],
        num_public_inputs: NUM_PUBLIC_INPUTS,
    }
}
