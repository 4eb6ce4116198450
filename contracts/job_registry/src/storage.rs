//! Storage key definitions for the job registry.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the job registry.
///
/// Configuration, counters and the ledger balance live in instance storage.
/// Postings and applicants live in persistent storage, one entry per record.
#[contracttype]
#[derive(Clone, Debug)]
pub enum JobKey {
    /// Address of the candidate registry used to vet applicants.
    CandidateRegistry,

    /// Token contract in which posting fees are paid.
    FeeToken,

    /// Id the next posting will receive.
    JobId,

    /// Number of live postings, which is also the number of occupied slots.
    JobCount,

    /// Maps slot index to Posting. Slots `0..JobCount` are always occupied.
    Job(u32),

    /// Number of applicants for a job id.
    ApplicantCount(u64),

    /// Maps (job id, position) to applicant Address, in application order.
    Applicant(u64, u32),

    /// Set when an Address has applied for a job id.
    Applied(u64, Address),

    /// Fees held by the registry and not yet withdrawn.
    Balance,
}

/// Time-to-live for postings and applicants in ledger entries.
pub const JOBS_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const JOBS_TTL_EXTEND: u32 = 2592000; // ~150 days
