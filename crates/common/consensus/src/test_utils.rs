use alloy_primitives::{Address, B256};
use blst::min_pk::SecretKey;
use ream_common::primitives::Gwei;
use ssz_types::VariableList;

use crate::{
    constants::{DST, GENESIS_SLOT, MIN_ACTIVATION_BALANCE},
    deposit_message::DepositMessage,
    electra::beacon_state::BeaconState,
    pending_deposit::PendingDeposit,
    pubkey::PubKey,
    signature::BlsSignature,
    validator::get_validator_from_deposit,
    withdrawal_credentials::WithdrawalCredentials,
};

/// Deterministic keypair, distinct per ``seed``.
pub fn test_keypair(seed: u8) -> (SecretKey, PubKey) {
    let secret_key = SecretKey::key_gen(&[seed; 32], &[]).expect("32 bytes of ikm is enough");
    let pubkey = PubKey::from(secret_key.sk_to_pk().to_bytes());
    (secret_key, pubkey)
}

pub fn eth1_credentials(seed: u8) -> B256 {
    WithdrawalCredentials::eth1_address(Address::repeat_byte(seed)).into()
}

pub fn compounding_credentials(seed: u8) -> B256 {
    WithdrawalCredentials::compounding_address(Address::repeat_byte(seed)).into()
}

pub fn sign_deposit(
    secret_key: &SecretKey,
    pubkey: &PubKey,
    withdrawal_credentials: B256,
    amount: Gwei,
) -> BlsSignature {
    let signing_root = DepositMessage {
        pubkey: pubkey.clone(),
        withdrawal_credentials,
        amount,
    }
    .signing_root();
    BlsSignature::from(secret_key.sign(signing_root.as_slice(), DST, &[]).to_bytes())
}

/// A pending deposit for ``seed``'s key, signed by that key.
pub fn signed_pending_deposit(
    seed: u8,
    withdrawal_credentials: B256,
    amount: Gwei,
) -> PendingDeposit {
    let (secret_key, pubkey) = test_keypair(seed);
    let signature = sign_deposit(&secret_key, &pubkey, withdrawal_credentials, amount);
    PendingDeposit {
        pubkey,
        withdrawal_credentials,
        amount,
        signature,
        slot: GENESIS_SLOT,
    }
}

/// A state with ``count`` active validators using keys seeded `1..=count` and eth1 credentials.
pub fn genesis_state(count: u8) -> BeaconState {
    let mut validators = vec![];
    for seed in 1..=count {
        let mut validator = get_validator_from_deposit(
            test_keypair(seed).1,
            eth1_credentials(seed),
            MIN_ACTIVATION_BALANCE,
        );
        validator.activation_eligibility_epoch = 0;
        validator.activation_epoch = 0;
        validators.push(validator);
    }

    BeaconState {
        slot: GENESIS_SLOT,
        balances: VariableList::from(vec![MIN_ACTIVATION_BALANCE; count as usize]),
        validators: VariableList::from(validators),
        pending_deposits: VariableList::default(),
    }
}
