//! Client interface for the candidate registry.
//!
//! Only the lookup the job registry needs is declared here, so the candidate
//! registry's exports are not linked into this contract.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "CandidateLookupClient")]
pub trait CandidateLookup {
    /// Candidate id registered to `identity`, or 0 if there is none.
    fn get_candidate_id_by_address(env: Env, identity: Address) -> u64;
}
