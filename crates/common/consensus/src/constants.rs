use alloy_primitives::{aliases::B32, fixed_bytes};
use ream_common::primitives::{Epoch, Gwei, Slot};

// Misc
pub const FAR_FUTURE_EPOCH: Epoch = u64::MAX;
pub const GENESIS_EPOCH: Epoch = 0;
pub const GENESIS_SLOT: Slot = 0;

// Time parameters
pub const SLOTS_PER_EPOCH: u64 = 32;

// Genesis
pub const GENESIS_FORK_VERSION: B32 = fixed_bytes!("00000000");

// Withdrawal prefixes
pub const BLS_WITHDRAWAL_PREFIX: u8 = 0x00;
pub const ETH1_ADDRESS_WITHDRAWAL_PREFIX: u8 = 0x01;
pub const COMPOUNDING_WITHDRAWAL_PREFIX: u8 = 0x02;

// Gwei values
pub const EFFECTIVE_BALANCE_INCREMENT: Gwei = 1_000_000_000;
pub const MIN_ACTIVATION_BALANCE: Gwei = 32_000_000_000;
pub const MAX_EFFECTIVE_BALANCE_ELECTRA: Gwei = 2_048_000_000_000;

// Domain types
pub const DOMAIN_DEPOSIT: B32 = fixed_bytes!("03000000");

// BLS
/// Ciphersuite tag of the proof-of-possession scheme used by the beacon chain.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Compressed encoding of the G2 point at infinity. Pending deposits that only top up an
/// existing validator carry this in place of a real signature.
pub const G2_POINT_AT_INFINITY: [u8; 96] = {
    let mut bytes = [0u8; 96];
    bytes[0] = 0xc0;
    bytes
};
