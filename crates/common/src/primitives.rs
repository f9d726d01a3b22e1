use alloy_primitives::aliases::B32;

pub type Domain = alloy_primitives::B256; // signature domain
pub type DomainType = B32; // domain type
pub type Epoch = u64; // epoch number
pub type Gwei = u64; // amount in gwei
pub type Slot = u64; // slot number
pub type ValidatorIndex = u64; // validator registry index
pub type Version = B32; // fork version number
