//! # Registry Access
//!
//! Owner-based access control shared by the registry contracts.
//!
//! The owner is written once during contract initialization and is fixed for
//! the lifetime of the contract; there is no transfer entry point. Contracts
//! call [`require_owner`] at the top of privileged operations.
//!
//! Error codes 1-3 are reserved for this crate. Contract error enums reuse the
//! same numbers for the same conditions so a client sees a single code space.

#![no_std]

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

/// Time-to-live for the contract instance, in ledgers.
pub const INSTANCE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const INSTANCE_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Access control failures.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AccessError {
    /// Owner has already been set.
    AlreadyInitialized = 1,
    /// Owner has not been set yet.
    NotInitialized = 2,
    /// Caller is not the contract owner.
    NotOwner = 3,
}

impl AccessError {
    /// Failure reason surfaced to callers.
    pub fn message(&self) -> &'static str {
        match self {
            AccessError::AlreadyInitialized => "Contract already initialized.",
            AccessError::NotInitialized => "Contract not initialized.",
            AccessError::NotOwner => "caller is not the owner",
        }
    }
}

impl From<AccessError> for soroban_sdk::Error {
    fn from(e: AccessError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

/// Instance storage key holding the owner.
#[contracttype]
#[derive(Clone, Debug)]
pub enum AccessKey {
    Owner,
}

/// Record `owner` as the contract owner.
///
/// # Panics
/// - `AlreadyInitialized` if an owner is already recorded
pub fn init_owner(env: &Env, owner: &Address) {
    if is_initialized(env) {
        panic_with_error!(env, AccessError::AlreadyInitialized);
    }

    owner.require_auth();
    env.storage().instance().set(&AccessKey::Owner, owner);
    extend_instance(env);
}

/// Whether an owner has been recorded.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&AccessKey::Owner)
}

/// Panic with `NotInitialized` unless an owner has been recorded.
pub fn require_initialized(env: &Env) {
    if !is_initialized(env) {
        panic_with_error!(env, AccessError::NotInitialized);
    }
}

/// The contract owner.
pub fn owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&AccessKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, AccessError::NotInitialized))
}

/// Whether `identity` is the contract owner. Always false before init.
pub fn is_owner(env: &Env, identity: &Address) -> bool {
    env.storage()
        .instance()
        .get::<_, Address>(&AccessKey::Owner)
        .map(|owner| owner == *identity)
        .unwrap_or(false)
}

/// Guard for owner-only operations.
///
/// # Panics
/// - `NotInitialized` if no owner is recorded
/// - `NotOwner` if `caller` is not the owner
pub fn require_owner(env: &Env, caller: &Address) {
    if *caller != owner(env) {
        panic_with_error!(env, AccessError::NotOwner);
    }

    caller.require_auth();
}

/// Bump the instance TTL so configuration and counters stay live.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
