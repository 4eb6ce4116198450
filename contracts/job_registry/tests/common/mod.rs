//! Shared fixtures: a candidate registry, a fee token and a job registry
//! deployed into one test environment.

#![allow(dead_code)]

use candidate_registry::{Candidate, CandidateRegistry, CandidateRegistryClient, Links};
use job_registry::{JobKey, JobRegistry, JobRegistryClient, POSTING_FEE};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token, vec,
    xdr::ToXdr,
    Address, Env, IntoVal, String, Symbol, Val, Vec,
};

pub struct Marketplace {
    pub env: Env,
    pub owner: Address,
    pub candidates: CandidateRegistryClient<'static>,
    pub jobs: JobRegistryClient<'static>,
    pub token: token::Client<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

pub fn setup() -> Marketplace {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);

    let candidates_id = env.register(CandidateRegistry, ());
    let candidates = CandidateRegistryClient::new(&env, &candidates_id);
    candidates.init(&owner);

    let asset = env.register_stellar_asset_contract_v2(owner.clone());
    let token = token::Client::new(&env, &asset.address());
    let token_admin = token::StellarAssetClient::new(&env, &asset.address());

    let jobs_id = env.register(JobRegistry, ());
    let jobs = JobRegistryClient::new(&env, &jobs_id);
    jobs.init(&owner, &candidates_id, &asset.address());

    token_admin.mint(&owner, &(POSTING_FEE * 10));

    Marketplace {
        env,
        owner,
        candidates,
        jobs,
        token,
        token_admin,
    }
}

pub fn text(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

/// Topics of an event published with a single symbol topic.
pub fn topic(env: &Env, name: &str) -> Vec<Val> {
    (Symbol::new(env, name),).into_val(env)
}

/// The most recent contract event.
pub fn last_event(env: &Env) -> (Address, Vec<Val>, Val) {
    env.events().all().last().expect("no events published")
}

/// Whether any recorded event carries the topic `name`.
pub fn published(env: &Env, name: &str) -> bool {
    let expected = topic(env, name);
    env.events()
        .all()
        .iter()
        .any(|(_, topics, _)| topics == expected)
}

impl Marketplace {
    /// New address holding enough fee tokens for ten postings.
    pub fn funded_employer(&self) -> Address {
        let employer = Address::generate(&self.env);
        self.token_admin.mint(&employer, &(POSTING_FEE * 10));
        employer
    }

    /// New address with a candidate profile.
    pub fn registered_candidate(&self) -> Address {
        let candidate = Address::generate(&self.env);
        self.candidates
            .register_candidate(&candidate_profile(&self.env, &candidate), &candidate);
        candidate
    }

    /// Post a job for `employer` with the exact posting fee.
    pub fn post_job(&self, employer: &Address, company: &str) -> u64 {
        let env = &self.env;
        self.jobs.add_job(
            employer,
            &text(env, company),
            &text(env, "Backend Dev"),
            &text(env, "This position is open as of now - Desc"),
            &text(env, "Full-time"),
            &text(env, "Noida"),
            &text(env, "https://www.company-url1.com/"),
            &POSTING_FEE,
        )
    }

    /// Post a job whose free-text fields are `size` bytes long.
    pub fn post_large_job(&self, employer: &Address, size: usize) -> u64 {
        let env = &self.env;
        let mut filler = [0u8; 1024];
        filler.fill(b'x');
        let long = String::from_bytes(env, &filler[..size]);

        self.jobs.add_job(
            employer,
            &text(env, "Company"),
            &text(env, "Backend Dev"),
            &long,
            &text(env, "Full-time"),
            &text(env, "Noida"),
            &text(env, "https://www.company-url1.com/"),
            &POSTING_FEE,
        )
    }

    /// Serialized size of the persistent entry under `key`, or None if absent.
    pub fn entry_size(&self, key: &JobKey) -> Option<u32> {
        self.env.as_contract(&self.jobs.address, || {
            self.env
                .storage()
                .persistent()
                .get::<_, Val>(key)
                .map(|value| value.to_xdr(&self.env).len())
        })
    }

    pub fn company_names(&self) -> Vec<String> {
        let mut names = Vec::new(&self.env);
        for job in self.jobs.all_jobs().iter() {
            names.push_back(job.company_name);
        }
        names
    }
}

pub fn candidate_profile(env: &Env, owner: &Address) -> Candidate {
    Candidate {
        id: 0,
        fname: text(env, "FUser"),
        lname: text(env, "LUser"),
        dob: 1_656_000_000,
        country: text(env, "India"),
        primary_role: text(env, "Backend Engineer"),
        yoe: text(env, "5"),
        bio: text(env, "Hi there."),
        pronouns: text(env, "She/Her"),
        profile_image_ipfs_url: text(env, "ipfs://Q83k773kuh234f2382sdf4s8f5e"),
        resume_ipfs_url: text(env, "ipfs://Qf98uik4mkmksdkwkufeu4eklfskdjfwehkri4"),
        experiences: vec![env, text(env, "I had first worked here.")],
        skills: vec![env, text(env, "Rust"), text(env, "Soroban")],
        owner_address: owner.clone(),
        links: Links {
            website: text(env, "https://www.fuserluser.abc"),
            linkedin: text(env, "https://au.linkedin.com/FUser"),
            github: text(env, "https://github.com/FUser"),
            twitter: text(env, "https://twitter.com/FUser"),
        },
    }
}
