use alloy_primitives::B256;
use ream_common::primitives::{Gwei, Slot};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::{pubkey::PubKey, signature::BlsSignature};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct PendingDeposit {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: Gwei,
    /// Proof of possession. Top-ups carry the point at infinity instead.
    #[serde(default)]
    pub signature: BlsSignature,
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: Slot,
}

impl PendingDeposit {
    pub fn signature(&self) -> Option<&BlsSignature> {
        (!self.signature.is_placeholder()).then_some(&self.signature)
    }
}

#[cfg(test)]
mod tests {
    use ssz::{Decode, Encode};

    use super::*;
    use crate::constants::GENESIS_SLOT;

    fn top_up() -> PendingDeposit {
        PendingDeposit {
            pubkey: PubKey::from([0x11; 48]),
            withdrawal_credentials: B256::repeat_byte(0x01),
            amount: 1_000_000_000,
            signature: BlsSignature::infinity(),
            slot: GENESIS_SLOT,
        }
    }

    #[test]
    fn test_top_up_has_no_signature() {
        assert_eq!(top_up().signature(), None);

        let mut deposit = top_up();
        deposit.signature = BlsSignature::from([0x99; 96]);
        assert_eq!(deposit.signature(), Some(&deposit.signature));
    }

    #[test]
    fn test_fixed_width_layout() {
        let bytes = top_up().as_ssz_bytes();

        assert_eq!(bytes.len(), 48 + 32 + 8 + 96 + 8);
        assert_eq!(&bytes[80..88], &1_000_000_000u64.to_le_bytes());
        assert_eq!(bytes[88], 0xc0);
        assert_eq!(PendingDeposit::from_ssz_bytes(&bytes).unwrap(), top_up());
    }

    #[test]
    fn test_yaml_without_signature() {
        let yaml = r#"
pubkey: "0x111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111"
withdrawal_credentials: "0x0101010101010101010101010101010101010101010101010101010101010101"
amount: "1000000000"
slot: "0"
"#;
        let deposit: PendingDeposit = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(deposit.pubkey, top_up().pubkey);
        assert_eq!(deposit.amount, 1_000_000_000);
        assert_eq!(deposit.signature(), None);
    }
}
