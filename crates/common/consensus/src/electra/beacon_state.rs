use alloy_primitives::B256;
use anyhow::{anyhow, ensure};
use ream_common::primitives::{Epoch, Gwei, Slot, ValidatorIndex};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{
    typenum::{U1099511627776, U134217728},
    VariableList,
};
use tree_hash_derive::TreeHash;

use crate::{
    deposit_message::is_valid_deposit_signature,
    misc::compute_epoch_at_slot,
    pending_deposit::PendingDeposit,
    pubkey::PubKey,
    validator::{get_validator_from_deposit, Validator},
    withdrawal_credentials::WithdrawalCredentials,
};

/// The registry-facing part of the Electra beacon state: the validator registry, the balance
/// ledger aligned with it, and the queue deposits are drained from.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct BeaconState {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: Slot,

    // Registry
    pub validators: VariableList<Validator, U1099511627776>,
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    pub balances: VariableList<u64, U1099511627776>,

    #[serde(default)]
    pub pending_deposits: VariableList<PendingDeposit, U134217728>,
}

impl BeaconState {
    /// Return the current epoch.
    pub fn get_current_epoch(&self) -> Epoch {
        compute_epoch_at_slot(self.slot)
    }

    /// Return the index of the first validator registered under ``pubkey``.
    pub fn get_validator_index(&self, pubkey: &PubKey) -> Option<ValidatorIndex> {
        self.validators
            .iter()
            .position(|validator| validator.pubkey == *pubkey)
            .map(|index| index as ValidatorIndex)
    }

    /// Increase the validator balance at index ``index`` by ``delta``.
    pub fn increase_balance(&mut self, index: ValidatorIndex, delta: Gwei) -> anyhow::Result<()> {
        let balance = self
            .balances
            .get_mut(index as usize)
            .ok_or_else(|| anyhow!("Balance for validator {index} not found"))?;
        *balance += delta;
        Ok(())
    }

    pub fn add_validator_to_registry(
        &mut self,
        pubkey: PubKey,
        withdrawal_credentials: B256,
        amount: Gwei,
    ) -> anyhow::Result<()> {
        ensure!(
            self.validators.len() == self.balances.len(),
            "Validators and balances are misaligned: {} != {}",
            self.validators.len(),
            self.balances.len()
        );
        self.validators
            .push(get_validator_from_deposit(
                pubkey,
                withdrawal_credentials,
                amount,
            ))
            .map_err(|err| anyhow!("Couldn't push to validators {:?}", err))?;
        self.balances
            .push(amount)
            .map_err(|err| anyhow!("Couldn't push to balances {:?}", err))?;
        Ok(())
    }

    /// Whether the validator at ``index`` may move to the compounding ``withdrawal_credentials``
    /// requested by a deposit: same destination, currently 0x01, and already exited.
    fn is_compounding_switch_allowed(
        &self,
        index: ValidatorIndex,
        withdrawal_credentials: B256,
    ) -> bool {
        let Some(validator) = self.validators.get(index as usize) else {
            return false;
        };
        let (Some(current), Ok(requested)) = (
            validator.credentials(),
            WithdrawalCredentials::try_from(withdrawal_credentials),
        ) else {
            return false;
        };

        requested.is_compounding()
            && current.is_eth1()
            && requested.shares_destination_with(&current)
            && validator.is_exited(self.get_current_epoch())
    }

    /// Apply a single dequeued ``deposit`` to the registry.
    ///
    /// Unknown keys are admitted only with a valid proof of possession; an invalid one drops the
    /// deposit without touching the state. Known keys are topped up unconditionally, and an exited
    /// 0x01 validator is moved to the 0x02 credentials the deposit carries if they share its
    /// address. A switch that is not yet allowed is not retried.
    ///
    /// Errors only when the state itself is malformed.
    pub fn apply_pending_deposit(&mut self, deposit: &PendingDeposit) -> anyhow::Result<()> {
        let Some(validator_index) = self.get_validator_index(&deposit.pubkey) else {
            // Verify the deposit signature (proof of possession) which is not checked by the
            // deposit contract
            let is_valid = deposit.signature().is_some_and(|signature| {
                is_valid_deposit_signature(
                    &deposit.pubkey,
                    deposit.withdrawal_credentials,
                    deposit.amount,
                    signature,
                )
            });
            if is_valid {
                self.add_validator_to_registry(
                    deposit.pubkey.clone(),
                    deposit.withdrawal_credentials,
                    deposit.amount,
                )?;
            }
            return Ok(());
        };

        // Increase balance by deposit amount
        self.increase_balance(validator_index, deposit.amount)?;

        if self.is_compounding_switch_allowed(validator_index, deposit.withdrawal_credentials) {
            self.validators[validator_index as usize].withdrawal_credentials =
                deposit.withdrawal_credentials;
        }

        Ok(())
    }

    /// Apply ``deposits`` one after another, in order.
    pub fn apply_pending_deposits<'a>(
        &mut self,
        deposits: impl IntoIterator<Item = &'a PendingDeposit>,
    ) -> anyhow::Result<()> {
        for deposit in deposits {
            self.apply_pending_deposit(deposit)?;
        }
        Ok(())
    }
}
