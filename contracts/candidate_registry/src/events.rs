//! Event emission helpers for the candidate registry.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when a candidate is registered.
pub fn emit_candidate_registered(env: &Env, owner: &Address, id: u64) {
    let topics = (Symbol::new(env, "candidate_registered"),);
    env.events().publish(topics, (owner.clone(), id));
}

/// Emit an event when a candidate edits their profile.
pub fn emit_candidate_edited(env: &Env, owner: &Address, id: u64) {
    let topics = (Symbol::new(env, "candidate_edited"),);
    env.events().publish(topics, (owner.clone(), id));
}
