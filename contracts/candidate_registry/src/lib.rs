//! # Candidate Registry
//!
//! On-chain registry of candidate profiles for the job marketplace.
//!
//! Each address may register exactly one profile. Profiles receive sequential
//! ids starting at 1 and are never deleted. The job registry resolves
//! applicants through [`CandidateRegistry::get_candidate_id_by_address`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&owner);
//!
//! // The profile's owner_address must be the caller.
//! let id = client.register_candidate(&profile, &caller);
//!
//! let candidate = client.get_candidate_by_address(&caller);
//! let candidate = client.get_candidate_by_id(&id);
//! ```

#![no_std]

mod candidate;
mod events;
mod storage;

pub use candidate::{Candidate, Links};
pub use storage::CandidateKey;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

use crate::events::*;
use crate::storage::{CANDIDATE_TTL_EXTEND, CANDIDATE_TTL_THRESHOLD};

/// Error codes for the candidate registry.
///
/// Codes 1-3 match `registry_access::AccessError`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CandidateError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not the registry owner.
    ///
    /// Raised by the shared `registry_access` guards; no candidate operation
    /// is owner-only, so it is listed to keep codes aligned.
    NotOwner = 3,
    /// Profile owner address differs from the caller.
    OwnerAddressMismatch = 4,
    /// Caller already has a registered profile.
    AlreadyRegistered = 5,
    /// Caller has no registered profile.
    NotRegistered = 6,
}

impl CandidateError {
    /// Failure reason surfaced to callers.
    pub fn message(&self) -> &'static str {
        match self {
            CandidateError::AlreadyInitialized => "Contract already initialized.",
            CandidateError::NotInitialized => "Contract not initialized.",
            CandidateError::NotOwner => "caller is not the owner",
            CandidateError::OwnerAddressMismatch => "OwnerAddress not matching caller.",
            CandidateError::AlreadyRegistered => "Candidate is registered using this address.",
            CandidateError::NotRegistered => "Candidate not registered using this address.",
        }
    }
}

impl From<CandidateError> for soroban_sdk::Error {
    fn from(e: CandidateError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct CandidateRegistry;

#[contractimpl]
impl CandidateRegistry {
    // ========== Initialization ==========

    /// Initialize the registry with its owner.
    ///
    /// This must be called once before any registration.
    pub fn init(env: Env, owner: Address) {
        registry_access::init_owner(&env, &owner);
        env.storage().instance().set(&CandidateKey::CandidateId, &0u64);
        env.storage().instance().set(&CandidateKey::CandidateCount, &0u64);
    }

    /// Get the owner address.
    pub fn owner(env: Env) -> Address {
        registry_access::owner(&env)
    }

    /// Check whether `identity` is the registry owner.
    pub fn is_owner(env: Env, identity: Address) -> bool {
        registry_access::is_owner(&env, &identity)
    }

    // ========== Registration ==========

    /// Register a candidate profile for the caller.
    ///
    /// The supplied `id` is ignored; the registry assigns the next id.
    ///
    /// # Returns
    /// The assigned candidate id.
    ///
    /// # Panics
    /// - If the contract is not initialized
    /// - If `profile.owner_address` is not the caller
    /// - If the caller already has a profile
    pub fn register_candidate(env: Env, profile: Candidate, caller: Address) -> u64 {
        caller.require_auth();

        // Check contract is initialized
        registry_access::require_initialized(&env);

        // Check profile belongs to caller
        if profile.owner_address != caller {
            log!(&env, "owner address mismatch", caller);
            panic_with_error!(&env, CandidateError::OwnerAddressMismatch);
        }

        // Check caller doesn't already have a profile
        if env
            .storage()
            .persistent()
            .has(&CandidateKey::Candidate(caller.clone()))
        {
            panic_with_error!(&env, CandidateError::AlreadyRegistered);
        }

        // Store candidate under the next id
        let id = Self::candidate_id(env.clone()) + 1;
        let candidate = Candidate { id, ..profile };

        Self::save_candidate(&env, &candidate);

        // Index by id
        env.storage()
            .persistent()
            .set(&CandidateKey::CandidateOwner(id), &caller);
        env.storage().persistent().extend_ttl(
            &CandidateKey::CandidateOwner(id),
            CANDIDATE_TTL_THRESHOLD,
            CANDIDATE_TTL_EXTEND,
        );

        // Increment counters
        let count = Self::total_candidates(env.clone());
        env.storage().instance().set(&CandidateKey::CandidateId, &id);
        env.storage()
            .instance()
            .set(&CandidateKey::CandidateCount, &(count + 1));
        registry_access::extend_instance(&env);

        emit_candidate_registered(&env, &caller, id);

        id
    }

    /// Replace the caller's profile.
    ///
    /// `id` and `owner_address` keep their stored values whatever the
    /// submitted profile says.
    ///
    /// # Panics
    /// - If the caller has no profile
    pub fn edit_registered_candidate(env: Env, profile: Candidate, caller: Address) {
        caller.require_auth();

        // Load existing profile
        let stored: Candidate = env
            .storage()
            .persistent()
            .get(&CandidateKey::Candidate(caller.clone()))
            .unwrap_or_else(|| panic_with_error!(&env, CandidateError::NotRegistered));

        // Keep stored id and owner
        let updated = profile.with_identity_of(&stored);
        Self::save_candidate(&env, &updated);

        emit_candidate_edited(&env, &caller, updated.id);
    }

    // ========== Queries ==========

    /// Get a candidate by owner address.
    pub fn get_candidate_by_address(env: Env, identity: Address) -> Option<Candidate> {
        env.storage()
            .persistent()
            .get(&CandidateKey::Candidate(identity))
    }

    /// Get a candidate by id.
    pub fn get_candidate_by_id(env: Env, id: u64) -> Option<Candidate> {
        let owner: Option<Address> = env
            .storage()
            .persistent()
            .get(&CandidateKey::CandidateOwner(id));

        owner.and_then(|addr| Self::get_candidate_by_address(env, addr))
    }

    /// Candidate id registered to `identity`, or 0 if there is none.
    pub fn get_candidate_id_by_address(env: Env, identity: Address) -> u64 {
        Self::get_candidate_by_address(env, identity)
            .map(|c| c.id)
            .unwrap_or(0)
    }

    /// Number of registered candidates.
    pub fn total_candidates(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&CandidateKey::CandidateCount)
            .unwrap_or(0)
    }

    /// Last assigned candidate id.
    pub fn candidate_id(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&CandidateKey::CandidateId)
            .unwrap_or(0)
    }

    // ========== Internal Helpers ==========

    fn save_candidate(env: &Env, candidate: &Candidate) {
        let key = CandidateKey::Candidate(candidate.owner_address.clone());
        env.storage().persistent().set(&key, candidate);
        env.storage()
            .persistent()
            .extend_ttl(&key, CANDIDATE_TTL_THRESHOLD, CANDIDATE_TTL_EXTEND);
    }
}
