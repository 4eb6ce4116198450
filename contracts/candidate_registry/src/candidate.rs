//! Candidate record and related types.

use soroban_sdk::{contracttype, Address, String, Vec};

/// External profile links. Stored as given, never fetched.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Links {
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

/// Candidate profile.
///
/// One record exists per owner address. `id` and `owner_address` are fixed at
/// registration; every other field may be replaced by the owner through
/// `edit_registered_candidate`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// Registry-assigned id, starting at 1. Ignored on input.
    pub id: u64,

    pub fname: String,
    pub lname: String,

    /// Date of birth as a unix timestamp.
    pub dob: u64,

    pub country: String,
    pub primary_role: String,

    /// Years of experience, free-form.
    pub yoe: String,

    pub bio: String,
    pub pronouns: String,

    /// IPFS reference to the profile image.
    pub profile_image_ipfs_url: String,

    /// IPFS reference to the resume document.
    pub resume_ipfs_url: String,

    /// Work history entries in display order.
    pub experiences: Vec<String>,

    pub skills: Vec<String>,

    /// Address that registered the profile. Must match the caller on
    /// registration.
    pub owner_address: Address,

    pub links: Links,
}

impl Candidate {
    /// Copy of `self` carrying the registry-owned fields of `stored`.
    ///
    /// Used by edits so the caller can never rewrite `id` or `owner_address`.
    pub fn with_identity_of(self, stored: &Candidate) -> Self {
        Self {
            id: stored.id,
            owner_address: stored.owner_address.clone(),
            ..self
        }
    }
}
