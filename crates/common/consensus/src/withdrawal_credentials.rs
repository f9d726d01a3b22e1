use alloy_primitives::{Address, FixedBytes, B256};
use anyhow::bail;
use ethereum_hashing::hash_fixed;

use crate::{
    constants::{
        BLS_WITHDRAWAL_PREFIX, COMPOUNDING_WITHDRAWAL_PREFIX, ETH1_ADDRESS_WITHDRAWAL_PREFIX,
    },
    pubkey::PubKey,
};

/// The 31 bytes following the prefix byte of a withdrawal credential.
pub type CredentialBody = FixedBytes<31>;

/// Withdrawal credentials decoded by their leading prefix byte.
///
/// The body is kept opaque. For the execution-layer schemes it holds 11 zero bytes followed by
/// the 20-byte address, for the BLS scheme it is the tail of `sha256(pubkey)`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WithdrawalCredentials {
    Bls(CredentialBody),
    Eth1(CredentialBody),
    Compounding(CredentialBody),
}

impl WithdrawalCredentials {
    /// `0x00 || sha256(pubkey)[1:]`
    pub fn bls_from_pubkey(pubkey: &PubKey) -> Self {
        Self::Bls(CredentialBody::from_slice(&hash_fixed(&pubkey.inner)[1..]))
    }

    pub fn eth1_address(address: Address) -> Self {
        Self::Eth1(address_body(address))
    }

    pub fn compounding_address(address: Address) -> Self {
        Self::Compounding(address_body(address))
    }

    pub fn prefix(&self) -> u8 {
        match self {
            Self::Bls(_) => BLS_WITHDRAWAL_PREFIX,
            Self::Eth1(_) => ETH1_ADDRESS_WITHDRAWAL_PREFIX,
            Self::Compounding(_) => COMPOUNDING_WITHDRAWAL_PREFIX,
        }
    }

    pub fn body(&self) -> &CredentialBody {
        match self {
            Self::Bls(body) | Self::Eth1(body) | Self::Compounding(body) => body,
        }
    }

    pub fn is_compounding(&self) -> bool {
        matches!(self, Self::Compounding(_))
    }

    pub fn is_eth1(&self) -> bool {
        matches!(self, Self::Eth1(_))
    }

    /// Whether both credentials point at the same destination, ignoring the scheme.
    pub fn shares_destination_with(&self, other: &Self) -> bool {
        self.body() == other.body()
    }

    /// The execution address for 0x01 and 0x02 credentials.
    pub fn execution_address(&self) -> Option<Address> {
        match self {
            Self::Bls(_) => None,
            Self::Eth1(body) | Self::Compounding(body) => Some(Address::from_slice(&body[11..])),
        }
    }

    pub fn to_b256(&self) -> B256 {
        let mut bytes = [0u8; 32];
        bytes[0] = self.prefix();
        bytes[1..].copy_from_slice(self.body().as_slice());
        B256::from(bytes)
    }
}

fn address_body(address: Address) -> CredentialBody {
    let mut body = [0u8; 31];
    body[11..].copy_from_slice(address.as_slice());
    CredentialBody::from(body)
}

impl TryFrom<B256> for WithdrawalCredentials {
    type Error = anyhow::Error;

    fn try_from(credentials: B256) -> anyhow::Result<Self> {
        let body = CredentialBody::from_slice(&credentials[1..]);
        Ok(match credentials[0] {
            BLS_WITHDRAWAL_PREFIX => Self::Bls(body),
            ETH1_ADDRESS_WITHDRAWAL_PREFIX => Self::Eth1(body),
            COMPOUNDING_WITHDRAWAL_PREFIX => Self::Compounding(body),
            prefix => bail!("Unknown withdrawal credential prefix {prefix:#04x}"),
        })
    }
}

impl From<WithdrawalCredentials> for B256 {
    fn from(credentials: WithdrawalCredentials) -> Self {
        credentials.to_b256()
    }
}
