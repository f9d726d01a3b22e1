use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum, FixedVector};
use tree_hash_derive::TreeHash;

use crate::constants::G2_POINT_AT_INFINITY;

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
#[serde(transparent)]
pub struct BlsSignature {
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub signature: FixedVector<u8, typenum::U96>,
}

impl BlsSignature {
    pub fn infinity() -> Self {
        Self::from(G2_POINT_AT_INFINITY)
    }

    /// Whether this value carries no signature at all: either zeroed or the point at infinity.
    pub fn is_placeholder(&self) -> bool {
        self.signature.iter().all(|byte| *byte == 0) || self.signature[..] == G2_POINT_AT_INFINITY
    }

    pub fn to_blst_signature(&self) -> anyhow::Result<blst::min_pk::Signature> {
        blst::min_pk::Signature::from_bytes(&self.signature).map_err(|err| {
            anyhow::anyhow!("Failed to convert signature to blst Signature type, {err:?}")
        })
    }
}

impl From<[u8; 96]> for BlsSignature {
    fn from(bytes: [u8; 96]) -> Self {
        Self {
            signature: FixedVector::from(bytes.to_vec()),
        }
    }
}
