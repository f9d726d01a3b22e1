use std::cmp::min;

use alloy_primitives::B256;
use ream_common::primitives::{Epoch, Gwei};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::{
    constants::{
        EFFECTIVE_BALANCE_INCREMENT, FAR_FUTURE_EPOCH, MAX_EFFECTIVE_BALANCE_ELECTRA,
        MIN_ACTIVATION_BALANCE,
    },
    pubkey::PubKey,
    withdrawal_credentials::WithdrawalCredentials,
};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Validator {
    pub pubkey: PubKey,

    /// Commitment to pubkey for withdrawals
    pub withdrawal_credentials: B256,

    /// Balance at stake
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance: Gwei,
    pub slashed: bool,

    /// When criteria for activation were met
    #[serde(with = "serde_utils::quoted_u64")]
    pub activation_eligibility_epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub activation_epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub exit_epoch: Epoch,

    /// When validator can withdraw funds
    #[serde(with = "serde_utils::quoted_u64")]
    pub withdrawable_epoch: Epoch,
}

impl Validator {
    /// Decoded credentials, or `None` if the prefix byte is not a known scheme.
    pub fn credentials(&self) -> Option<WithdrawalCredentials> {
        WithdrawalCredentials::try_from(self.withdrawal_credentials).ok()
    }

    /// Check if ``validator`` has an 0x01 prefixed "eth1" withdrawal credential.
    pub fn has_eth1_withdrawal_credential(&self) -> bool {
        self.credentials()
            .is_some_and(|credentials| credentials.is_eth1())
    }

    /// Check if ``validator`` has an 0x02 prefixed "compounding" withdrawal credential.
    pub fn has_compounding_withdrawal_credential(&self) -> bool {
        self.credentials()
            .is_some_and(|credentials| credentials.is_compounding())
    }

    pub fn has_execution_withdrawal_credential(&self) -> bool {
        self.has_eth1_withdrawal_credential() || self.has_compounding_withdrawal_credential()
    }

    /// Whether the validator's exit has been scheduled and reached by ``epoch``.
    pub fn is_exited(&self, epoch: Epoch) -> bool {
        self.exit_epoch != FAR_FUTURE_EPOCH && self.exit_epoch <= epoch
    }

    pub fn get_max_effective_balance(&self) -> Gwei {
        if self.has_compounding_withdrawal_credential() {
            MAX_EFFECTIVE_BALANCE_ELECTRA
        } else {
            MIN_ACTIVATION_BALANCE
        }
    }
}

pub fn get_validator_from_deposit(
    pubkey: PubKey,
    withdrawal_credentials: B256,
    amount: Gwei,
) -> Validator {
    let mut validator = Validator {
        pubkey,
        withdrawal_credentials,
        effective_balance: 0,
        slashed: false,
        activation_eligibility_epoch: FAR_FUTURE_EPOCH,
        activation_epoch: FAR_FUTURE_EPOCH,
        exit_epoch: FAR_FUTURE_EPOCH,
        withdrawable_epoch: FAR_FUTURE_EPOCH,
    };

    validator.effective_balance = min(
        amount - amount % EFFECTIVE_BALANCE_INCREMENT,
        validator.get_max_effective_balance(),
    );
    validator
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    fn credentials(compounding: bool) -> B256 {
        let address = address!("5fbe74a283f7954f10aa04c2edf55578811aeb03");
        if compounding {
            WithdrawalCredentials::compounding_address(address).into()
        } else {
            WithdrawalCredentials::eth1_address(address).into()
        }
    }

    #[rstest::rstest]
    #[case(false, 0, 0)]
    #[case(false, 1_500_000_000, 1_000_000_000)]
    #[case(false, 100_000_000_000, MIN_ACTIVATION_BALANCE)]
    #[case(true, 100_000_000_000, 100_000_000_000)]
    #[case(true, 3_000_000_000_000, MAX_EFFECTIVE_BALANCE_ELECTRA)]
    fn test_effective_balance_from_deposit(
        #[case] compounding: bool,
        #[case] amount: Gwei,
        #[case] effective_balance: Gwei,
    ) {
        let validator =
            get_validator_from_deposit(PubKey::from([7; 48]), credentials(compounding), amount);

        assert_eq!(validator.effective_balance, effective_balance);
        assert_eq!(validator.exit_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(validator.activation_epoch, FAR_FUTURE_EPOCH);
        assert!(!validator.slashed);
    }

    #[rstest::rstest]
    #[case(FAR_FUTURE_EPOCH, 10, false)]
    #[case(11, 10, false)]
    #[case(10, 10, true)]
    #[case(9, 10, true)]
    fn test_is_exited(#[case] exit_epoch: Epoch, #[case] epoch: Epoch, #[case] exited: bool) {
        let mut validator = get_validator_from_deposit(PubKey::from([7; 48]), B256::ZERO, 0);
        validator.exit_epoch = exit_epoch;
        assert_eq!(validator.is_exited(epoch), exited);
    }

    #[test]
    fn test_credential_predicates() {
        let mut validator = get_validator_from_deposit(PubKey::from([7; 48]), B256::ZERO, 0);
        assert!(!validator.has_execution_withdrawal_credential());

        validator.withdrawal_credentials = credentials(false);
        assert!(validator.has_eth1_withdrawal_credential());
        assert!(!validator.has_compounding_withdrawal_credential());

        validator.withdrawal_credentials = credentials(true);
        assert!(validator.has_compounding_withdrawal_credential());
        assert!(validator.has_execution_withdrawal_credential());

        validator.withdrawal_credentials = B256::repeat_byte(0xff);
        assert!(validator.credentials().is_none());
        assert!(!validator.has_execution_withdrawal_credential());
    }
}
