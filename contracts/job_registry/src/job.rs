//! Job posting records.

use soroban_sdk::{contracttype, Address, String, Vec};

/// A job posting as stored in its slot.
///
/// Applicants are kept under their own keys, so a stored posting does not
/// grow as candidates apply.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Posting {
    /// Permanent id, assigned from a counter that starts at 0.
    pub job_id: u64,

    /// Address that created and paid for the posting.
    pub employer: Address,

    pub company_name: String,
    pub role: String,
    pub description: String,

    /// Full-time, part-time, contract and so on. Free-form.
    pub job_type: String,

    pub location: String,
    pub apply_url: String,
}

impl Posting {
    /// Full job view with its applicant list.
    pub fn into_job(self, applied_candidates: Vec<Address>) -> Job {
        Job {
            job_id: self.job_id,
            employer: self.employer,
            company_name: self.company_name,
            role: self.role,
            description: self.description,
            job_type: self.job_type,
            location: self.location,
            apply_url: self.apply_url,
            applied_candidates,
        }
    }
}

/// A job posting together with its applicants.
///
/// Postings are kept in a dense list; a posting's slot index shifts when an
/// earlier posting is deleted, while `job_id` never changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Job {
    pub job_id: u64,
    pub employer: Address,
    pub company_name: String,
    pub role: String,
    pub description: String,
    pub job_type: String,
    pub location: String,
    pub apply_url: String,

    /// Applicant addresses, first applicant first.
    pub applied_candidates: Vec<Address>,
}
