//! Event emission helpers for the job registry.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when a job is posted.
pub fn emit_job_added(env: &Env, job_id: u64, employer: &Address, fee: i128) {
    let topics = (Symbol::new(env, "job_added"),);
    env.events().publish(topics, (job_id, employer.clone(), fee));
}

/// Emit an event when a job is deleted.
pub fn emit_job_deleted(env: &Env, job_id: u64, caller: &Address) {
    let topics = (Symbol::new(env, "job_deleted"),);
    env.events().publish(topics, (job_id, caller.clone()));
}

/// Emit an event when a candidate applies for a job.
pub fn emit_job_applied(env: &Env, job_id: u64, candidate: &Address) {
    let topics = (Symbol::new(env, "job_applied"),);
    env.events().publish(topics, (job_id, candidate.clone()));
}

/// Emit an event when the owner withdraws collected fees.
pub fn emit_funds_withdrawn(env: &Env, destination: &Address, amount: i128) {
    let topics = (Symbol::new(env, "funds_withdrawn"),);
    env.events().publish(topics, (destination.clone(), amount));
}
