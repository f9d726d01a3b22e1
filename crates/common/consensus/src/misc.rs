use alloy_primitives::B256;
use ream_common::primitives::{Domain, DomainType, Epoch, Slot, Version};
use tree_hash::TreeHash;

use crate::{
    constants::{GENESIS_FORK_VERSION, SLOTS_PER_EPOCH},
    fork_data::ForkData,
    signing_data::SigningData,
};

/// Return the epoch number at ``slot``.
pub fn compute_epoch_at_slot(slot: Slot) -> Epoch {
    slot / SLOTS_PER_EPOCH
}

/// Return the start slot of ``epoch``.
pub fn compute_start_slot_at_epoch(epoch: Epoch) -> Slot {
    epoch * SLOTS_PER_EPOCH
}

/// Return the 32-byte fork data root for the ``current_version`` and ``genesis_validators_root``.
/// This is used primarily in signature domains to avoid collisions across forks/chains.
pub fn compute_fork_data_root(current_version: Version, genesis_validators_root: B256) -> B256 {
    ForkData {
        current_version,
        genesis_validators_root,
    }
    .tree_hash_root()
}

/// Return the domain for the ``domain_type`` and ``fork_version``.
pub fn compute_domain(
    domain_type: DomainType,
    fork_version: Option<Version>,
    genesis_validators_root: Option<B256>,
) -> Domain {
    let fork_version = fork_version.unwrap_or(GENESIS_FORK_VERSION);
    let genesis_validators_root = genesis_validators_root.unwrap_or_default();
    let fork_data_root = compute_fork_data_root(fork_version, genesis_validators_root);
    B256::from_slice(&[domain_type.as_slice(), &fork_data_root[..28]].concat())
}

/// Return the signing root for the corresponding signing data.
pub fn compute_signing_root<SSZObject: TreeHash>(
    ssz_object: &SSZObject,
    domain: Domain,
) -> B256 {
    SigningData {
        object_root: ssz_object.tree_hash_root(),
        domain,
    }
    .tree_hash_root()
}
