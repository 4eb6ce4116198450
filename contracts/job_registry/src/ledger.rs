//! Fee ledger.
//!
//! Tracks the posting fees the registry holds. The recorded balance moves in
//! the same invocation as the matching token transfer, so a failed transfer
//! rolls back the ledger change with it.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::storage::JobKey;
use crate::JobError;

/// Fees currently held.
pub fn balance(env: &Env) -> i128 {
    env.storage().instance().get(&JobKey::Balance).unwrap_or(0)
}

/// Token contract that fees are paid in.
pub fn fee_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&JobKey::FeeToken)
        .unwrap_or_else(|| panic_with_error!(env, JobError::NotInitialized))
}

/// Pull `amount` from `payer` into the registry and credit it.
pub fn collect(env: &Env, payer: &Address, amount: i128) {
    let token = token::Client::new(env, &fee_token(env));
    token.transfer(payer, &env.current_contract_address(), &amount);

    env.storage()
        .instance()
        .set(&JobKey::Balance, &(balance(env) + amount));
}

/// Send the whole balance to `destination` and zero it.
///
/// Returns the amount sent.
pub fn withdraw_all(env: &Env, destination: &Address) -> i128 {
    let amount = balance(env);
    env.storage().instance().set(&JobKey::Balance, &0i128);

    if amount > 0 {
        let token = token::Client::new(env, &fee_token(env));
        token.transfer(&env.current_contract_address(), destination, &amount);
    }

    amount
}
