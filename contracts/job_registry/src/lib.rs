//! # Job Registry
//!
//! Job postings for the candidate marketplace.
//!
//! Employers pay a fixed posting fee to list a job. Registered candidates (as
//! recorded by the candidate registry this contract is linked to) may apply
//! once per job. Postings are kept in dense slots, one storage entry each;
//! deleting a posting shifts later postings down by one slot. Posting fees are
//! held by the registry until the owner withdraws them and are not refunded
//! on deletion.
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&owner, &candidate_registry, &fee_token);
//!
//! let job_id = client.add_job(
//!     &employer, &company, &role, &description, &job_type, &location, &apply_url,
//!     &POSTING_FEE,
//! );
//!
//! client.apply_for_job(&0, &candidate);
//! let applicants = client.get_applied_candidates_by_job_id(&0);
//!
//! client.withdraw_funds(&owner, &owner);
//! ```

#![no_std]

mod candidates;
mod events;
mod job;
mod ledger;
mod postings;
mod storage;

pub use candidates::{CandidateLookup, CandidateLookupClient};
pub use job::{Job, Posting};
pub use storage::JobKey;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Vec};

use crate::events::*;

/// Fee, in fee-token units, that must accompany every posting.
pub const POSTING_FEE: i128 = 5_000_000_000_000_000;

/// Error codes for the job registry.
///
/// Codes 1-3 match `registry_access::AccessError`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum JobError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not the registry owner.
    NotOwner = 3,
    /// Caller is neither the posting's employer nor the owner.
    NotEmployerOrOwner = 4,
    /// Caller has no profile in the candidate registry.
    CandidateNotRegistered = 5,
    /// Caller has already applied for this job.
    AlreadyApplied = 6,
    /// Payment differs from the posting fee.
    IncorrectPostingFee = 7,
    /// No posting at the given slot.
    JobNotFound = 8,
}

impl JobError {
    /// Failure reason surfaced to callers.
    pub fn message(&self) -> &'static str {
        match self {
            JobError::AlreadyInitialized => "Contract already initialized.",
            JobError::NotInitialized => "Contract not initialized.",
            JobError::NotOwner => "caller is not the owner",
            JobError::NotEmployerOrOwner => "You are neither employer of this job nor owner.",
            JobError::CandidateNotRegistered => "Candidate not registered using this address.",
            JobError::AlreadyApplied => {
                "You have already registered for this job using this address."
            }
            JobError::IncorrectPostingFee => "Attached value must equal the posting fee.",
            JobError::JobNotFound => "No job at this slot.",
        }
    }
}

impl From<JobError> for soroban_sdk::Error {
    fn from(e: JobError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct JobRegistry;

#[contractimpl]
impl JobRegistry {
    // ========== Initialization ==========

    /// Initialize the registry.
    ///
    /// # Arguments
    /// * `owner` - Address allowed to withdraw fees and delete any posting
    /// * `candidate_registry` - Deployed candidate registry used to vet applicants
    /// * `fee_token` - Token contract in which posting fees are paid
    pub fn init(env: Env, owner: Address, candidate_registry: Address, fee_token: Address) {
        registry_access::init_owner(&env, &owner);

        env.storage()
            .instance()
            .set(&JobKey::CandidateRegistry, &candidate_registry);
        env.storage().instance().set(&JobKey::FeeToken, &fee_token);
        env.storage().instance().set(&JobKey::JobId, &0u64);
        env.storage().instance().set(&JobKey::JobCount, &0u64);
        env.storage().instance().set(&JobKey::Balance, &0i128);
    }

    /// Get the owner address.
    pub fn owner(env: Env) -> Address {
        registry_access::owner(&env)
    }

    /// Check whether `identity` is the registry owner.
    pub fn is_owner(env: Env, identity: Address) -> bool {
        registry_access::is_owner(&env, &identity)
    }

    /// Get the linked candidate registry.
    pub fn candidate_registry(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&JobKey::CandidateRegistry)
            .unwrap_or_else(|| panic_with_error!(&env, JobError::NotInitialized))
    }

    /// Get the fee token.
    pub fn fee_token(env: Env) -> Address {
        ledger::fee_token(&env)
    }

    /// Get the posting fee.
    pub fn posting_fee(_env: Env) -> i128 {
        POSTING_FEE
    }

    // ========== Postings ==========

    /// Post a job, paying the posting fee from `employer`.
    ///
    /// # Returns
    /// The new posting's `job_id`.
    ///
    /// # Panics
    /// - If the contract is not initialized
    /// - If `payment` is not exactly [`POSTING_FEE`]
    /// - If the fee transfer fails
    #[allow(clippy::too_many_arguments)]
    pub fn add_job(
        env: Env,
        employer: Address,
        company_name: String,
        role: String,
        description: String,
        job_type: String,
        location: String,
        apply_url: String,
        payment: i128,
    ) -> u64 {
        employer.require_auth();
        registry_access::require_initialized(&env);

        // Fee must match exactly
        if payment != POSTING_FEE {
            log!(&env, "incorrect posting fee", payment);
            panic_with_error!(&env, JobError::IncorrectPostingFee);
        }

        // Collect fee
        ledger::collect(&env, &employer, payment);

        // Store posting in the next free slot
        let job_id = Self::job_id(env.clone());
        let posting = Posting {
            job_id,
            employer: employer.clone(),
            company_name,
            role,
            description,
            job_type,
            location,
            apply_url,
        };
        postings::push(&env, &posting);

        env.storage().instance().set(&JobKey::JobId, &(job_id + 1));
        registry_access::extend_instance(&env);

        emit_job_added(&env, job_id, &employer, payment);

        job_id
    }

    /// Get the posting at slot `index`.
    pub fn get_job_by_id(env: Env, index: u32) -> Job {
        let posting = Self::posting_at(&env, index);
        let applicants = postings::applicants(&env, posting.job_id);
        posting.into_job(applicants)
    }

    /// Get every posting in slot order.
    pub fn all_jobs(env: Env) -> Vec<Job> {
        let mut jobs = Vec::new(&env);
        for index in 0..postings::count(&env) {
            jobs.push_back(Self::get_job_by_id(env.clone(), index));
        }
        jobs
    }

    /// Delete the posting at slot `index`.
    ///
    /// Later postings move down one slot. The posting fee is not refunded.
    ///
    /// # Panics
    /// - If there is no posting at `index`
    /// - If the caller is neither the posting's employer nor the owner
    pub fn delete_job(env: Env, index: u32, caller: Address) {
        caller.require_auth();

        let posting = Self::posting_at(&env, index);

        // Employer or owner only
        if posting.employer != caller && !registry_access::is_owner(&env, &caller) {
            panic_with_error!(&env, JobError::NotEmployerOrOwner);
        }

        // Shift later postings down
        postings::remove(&env, index);
        registry_access::extend_instance(&env);

        emit_job_deleted(&env, posting.job_id, &caller);
    }

    // ========== Applications ==========

    /// Apply for the posting at slot `index`.
    ///
    /// # Panics
    /// - If there is no posting at `index`
    /// - If the caller has no profile in the candidate registry
    /// - If the caller has already applied for this posting
    pub fn apply_for_job(env: Env, index: u32, caller: Address) {
        caller.require_auth();

        let posting = Self::posting_at(&env, index);

        // Check caller is a registered candidate
        let registry = CandidateLookupClient::new(&env, &Self::candidate_registry(env.clone()));
        if registry.get_candidate_id_by_address(&caller) == 0 {
            log!(&env, "applicant not registered", caller);
            panic_with_error!(&env, JobError::CandidateNotRegistered);
        }

        // Check caller hasn't applied already
        if postings::has_applied(&env, posting.job_id, &caller) {
            panic_with_error!(&env, JobError::AlreadyApplied);
        }

        postings::add_applicant(&env, posting.job_id, &caller);

        emit_job_applied(&env, posting.job_id, &caller);
    }

    /// Get the applicants for the posting at slot `index`, first applicant first.
    pub fn get_applied_candidates_by_job_id(env: Env, index: u32) -> Vec<Address> {
        let posting = Self::posting_at(&env, index);
        postings::applicants(&env, posting.job_id)
    }

    // ========== Funds ==========

    /// Send every held fee to `destination` (owner only).
    ///
    /// # Returns
    /// The amount transferred.
    pub fn withdraw_funds(env: Env, destination: Address, caller: Address) -> i128 {
        // Owner only
        registry_access::require_owner(&env, &caller);

        let amount = ledger::withdraw_all(&env, &destination);
        registry_access::extend_instance(&env);

        emit_funds_withdrawn(&env, &destination, amount);

        amount
    }

    /// Fees currently held by the registry.
    pub fn balance(env: Env) -> i128 {
        ledger::balance(&env)
    }

    // ========== Counters ==========

    /// Number of live postings.
    pub fn total_jobs(env: Env) -> u64 {
        postings::count(&env) as u64
    }

    /// Id the next posting will receive.
    pub fn job_id(env: Env) -> u64 {
        env.storage().instance().get(&JobKey::JobId).unwrap_or(0)
    }

    // ========== Internal Helpers ==========

    fn posting_at(env: &Env, index: u32) -> Posting {
        postings::get(env, index)
            .unwrap_or_else(|| panic_with_error!(env, JobError::JobNotFound))
    }
}
