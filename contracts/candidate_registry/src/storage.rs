//! Storage key definitions for the candidate registry.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the candidate registry.
///
/// Counters live in instance storage, records in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum CandidateKey {
    /// Last assigned candidate id. Zero until the first registration.
    CandidateId,

    /// Number of registered candidates.
    CandidateCount,

    /// Maps owner Address to Candidate.
    Candidate(Address),

    /// Maps candidate id to owner Address, for id lookups.
    CandidateOwner(u64),
}

/// Time-to-live for candidate records in ledger entries.
pub const CANDIDATE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const CANDIDATE_TTL_EXTEND: u32 = 2592000; // ~150 days
