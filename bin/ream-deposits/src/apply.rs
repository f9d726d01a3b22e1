use std::{fs, io::Write};

use anyhow::Context;
use ream_consensus::{electra::beacon_state::BeaconState, pending_deposit::PendingDeposit};
use tracing::{debug, info, warn};

use crate::cli::ApplyCommand;

/// What a single pending deposit did to the registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DepositOutcome {
    Admitted { index: usize },
    Rejected,
    ToppedUp { index: usize },
    SwitchedToCompounding { index: usize },
}

/// Apply ``deposits`` in order and report the outcome of each.
pub fn apply_and_report(
    state: &mut BeaconState,
    deposits: &[PendingDeposit],
) -> anyhow::Result<Vec<DepositOutcome>> {
    let mut outcomes = Vec::with_capacity(deposits.len());
    for (position, deposit) in deposits.iter().enumerate() {
        let existing_index = state
            .get_validator_index(&deposit.pubkey)
            .map(|index| index as usize);
        let credentials_before =
            existing_index.map(|index| state.validators[index].withdrawal_credentials);
        let validator_count = state.validators.len();

        state
            .apply_pending_deposit(deposit)
            .with_context(|| format!("Failed to apply pending deposit {position}"))?;

        let outcome = match existing_index {
            None if state.validators.len() > validator_count => DepositOutcome::Admitted {
                index: validator_count,
            },
            None => DepositOutcome::Rejected,
            Some(index)
                if credentials_before
                    != Some(state.validators[index].withdrawal_credentials) =>
            {
                DepositOutcome::SwitchedToCompounding { index }
            }
            Some(index) => DepositOutcome::ToppedUp { index },
        };

        match outcome {
            DepositOutcome::Rejected => {
                warn!(position, pubkey = ?deposit.pubkey, "Dropped deposit with invalid signature")
            }
            _ => debug!(position, amount = deposit.amount, ?outcome, "Applied pending deposit"),
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

pub fn run_apply(cmd: &ApplyCommand) -> anyhow::Result<()> {
    let state = fs::read_to_string(&cmd.state)
        .with_context(|| format!("Failed to read state from {}", cmd.state.display()))?;
    let mut state: BeaconState = serde_yaml::from_str(&state).context("Failed to parse state")?;

    let deposits = fs::read_to_string(&cmd.deposits)
        .with_context(|| format!("Failed to read deposits from {}", cmd.deposits.display()))?;
    let deposits: Vec<PendingDeposit> =
        serde_yaml::from_str(&deposits).context("Failed to parse pending deposits")?;

    let outcomes = apply_and_report(&mut state, &deposits)?;
    let admitted = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, DepositOutcome::Admitted { .. }))
        .count();
    let rejected = outcomes
        .iter()
        .filter(|outcome| **outcome == DepositOutcome::Rejected)
        .count();
    info!(
        deposits = deposits.len(),
        admitted,
        rejected,
        validators = state.validators.len(),
        "Applied pending deposits"
    );

    let post_state = serde_yaml::to_string(&state).context("Failed to serialize post-state")?;
    match &cmd.output {
        Some(path) => fs::write(path, post_state)
            .with_context(|| format!("Failed to write post-state to {}", path.display()))?,
        None => std::io::stdout()
            .write_all(post_state.as_bytes())
            .context("Failed to write post-state to stdout")?,
    }
    Ok(())
}
