use alloy_primitives::B256;
use blst::BLST_ERROR;
use ream_common::primitives::Gwei;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::{
    constants::{DOMAIN_DEPOSIT, DST},
    misc::{compute_domain, compute_signing_root},
    pubkey::PubKey,
    signature::BlsSignature,
};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct DepositMessage {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: Gwei,
}

impl DepositMessage {
    /// Signing root under the fork-agnostic deposit domain.
    pub fn signing_root(&self) -> B256 {
        // Fork-agnostic domain since deposits are valid across forks
        let domain = compute_domain(DOMAIN_DEPOSIT, None, None);
        compute_signing_root(self, domain)
    }
}

/// Verify the deposit proof of possession. Keys or signatures that do not decode to valid curve
/// points are treated as a failed verification.
pub fn is_valid_deposit_signature(
    pubkey: &PubKey,
    withdrawal_credentials: B256,
    amount: Gwei,
    signature: &BlsSignature,
) -> bool {
    let Ok(public_key) = pubkey.to_blst_public_key() else {
        return false;
    };
    let Ok(signature) = signature.to_blst_signature() else {
        return false;
    };
    let signing_root = DepositMessage {
        pubkey: pubkey.clone(),
        withdrawal_credentials,
        amount,
    }
    .signing_root();

    signature.verify(true, signing_root.as_slice(), DST, &[], &public_key, true)
        == BLST_ERROR::BLST_SUCCESS
}
