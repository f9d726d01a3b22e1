use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum, FixedVector};
use tree_hash_derive::TreeHash;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
#[serde(transparent)]
pub struct PubKey {
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub inner: FixedVector<u8, typenum::U48>,
}

impl PubKey {
    pub fn to_blst_public_key(&self) -> anyhow::Result<blst::min_pk::PublicKey> {
        blst::min_pk::PublicKey::from_bytes(&self.inner).map_err(|err| {
            anyhow::anyhow!("Failed to convert pubkey to blst PublicKey type, {err:?}")
        })
    }
}

impl From<[u8; 48]> for PubKey {
    fn from(bytes: [u8; 48]) -> Self {
        Self {
            inner: FixedVector::from(bytes.to_vec()),
        }
    }
}
