//! Slot and applicant storage.
//!
//! Postings occupy slots `0..count` with one persistent entry per slot.
//! Removing a slot moves every later posting down by one and drops the last
//! slot key. Applicants are keyed by the permanent job id, so they stay put
//! when their posting changes slot.

use soroban_sdk::{Address, Env, Vec};

use crate::job::Posting;
use crate::storage::{JobKey, JOBS_TTL_EXTEND, JOBS_TTL_THRESHOLD};

/// Number of occupied slots.
pub fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<_, u64>(&JobKey::JobCount)
        .unwrap_or(0) as u32
}

fn set_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&JobKey::JobCount, &(count as u64));
}

/// Posting at `slot`, if the slot is occupied.
pub fn get(env: &Env, slot: u32) -> Option<Posting> {
    if slot >= count(env) {
        return None;
    }
    env.storage().persistent().get(&JobKey::Job(slot))
}

fn put(env: &Env, slot: u32, posting: &Posting) {
    let key = JobKey::Job(slot);
    env.storage().persistent().set(&key, posting);
    env.storage()
        .persistent()
        .extend_ttl(&key, JOBS_TTL_THRESHOLD, JOBS_TTL_EXTEND);
}

/// Append `posting` after the last occupied slot.
pub fn push(env: &Env, posting: &Posting) {
    let slot = count(env);
    put(env, slot, posting);
    set_count(env, slot + 1);
}

/// Remove the posting at `slot`, shifting later postings down by one.
///
/// The caller must have checked that `slot` is occupied.
pub fn remove(env: &Env, slot: u32) {
    let last = count(env) - 1;

    for i in slot..last {
        let next: Option<Posting> = env.storage().persistent().get(&JobKey::Job(i + 1));
        if let Some(next) = next {
            put(env, i, &next);
        }
    }

    env.storage().persistent().remove(&JobKey::Job(last));
    set_count(env, last);
}

/// Whether `candidate` has applied for `job_id`.
pub fn has_applied(env: &Env, job_id: u64, candidate: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&JobKey::Applied(job_id, candidate.clone()))
}

/// Record `candidate` as the next applicant for `job_id`.
pub fn add_applicant(env: &Env, job_id: u64, candidate: &Address) {
    let position = applicant_count(env, job_id);

    let keys = [
        JobKey::Applicant(job_id, position),
        JobKey::Applied(job_id, candidate.clone()),
        JobKey::ApplicantCount(job_id),
    ];
    env.storage().persistent().set(&keys[0], candidate);
    env.storage().persistent().set(&keys[1], &true);
    env.storage().persistent().set(&keys[2], &(position + 1));

    // Extend TTL
    for key in keys.iter() {
        env.storage()
            .persistent()
            .extend_ttl(key, JOBS_TTL_THRESHOLD, JOBS_TTL_EXTEND);
    }
}

/// Number of applicants for `job_id`.
pub fn applicant_count(env: &Env, job_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&JobKey::ApplicantCount(job_id))
        .unwrap_or(0)
}

/// Applicants for `job_id` in application order.
pub fn applicants(env: &Env, job_id: u64) -> Vec<Address> {
    let mut result = Vec::new(env);

    for position in 0..applicant_count(env, job_id) {
        if let Some(candidate) = env
            .storage()
            .persistent()
            .get::<_, Address>(&JobKey::Applicant(job_id, position))
        {
            result.push_back(candidate);
        }
    }

    result
}
