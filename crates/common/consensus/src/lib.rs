pub mod constants;
pub mod deposit_message;
pub mod electra;
pub mod fork_data;
pub mod misc;
pub mod pending_deposit;
pub mod pubkey;
pub mod signature;
pub mod signing_data;
pub mod validator;
pub mod withdrawal_credentials;

#[cfg(test)]
pub(crate) mod test_utils;
