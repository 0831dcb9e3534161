// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use vote_dashboard::QueryGateway;
use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, Vote, VoteFilter, VoteWithCandidate,
};

pub fn create_test_candidate(id: i64, name: &str, slug: &str) -> Candidate {
    Candidate::new(
        CandidateId::new(id),
        name,
        slug,
        &format!("https://example.org/{slug}.jpg"),
    )
}

pub fn create_test_vote(
    id: i64,
    candidate_id: i64,
    country: Option<&str>,
    region: Option<&str>,
) -> Vote {
    Vote::new(id, CandidateId::new(candidate_id), country, region)
}

pub fn create_test_country_total(
    country: Option<&str>,
    candidate: &Candidate,
    total_votes: u64,
) -> CountryTotal {
    CountryTotal {
        country: country.map(ToString::to_string),
        candidate: candidate.clone(),
        total_votes,
    }
}

pub const fn create_test_candidate_total(candidate_id: i64, total_votes: u64) -> CandidateTotal {
    CandidateTotal {
        candidate_id: CandidateId::new(candidate_id),
        total_votes,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// The error every `FailingGateway` read returns.
#[derive(Debug)]
pub struct StoreUnavailable;

impl std::fmt::Display for StoreUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store unavailable")
    }
}

impl std::error::Error for StoreUnavailable {}

/// A gateway whose every read fails.
pub struct FailingGateway;

impl QueryGateway for FailingGateway {
    type Error = StoreUnavailable;

    fn get_candidate(&mut self, _id: CandidateId) -> Result<Option<Candidate>, StoreUnavailable> {
        Err(StoreUnavailable)
    }

    fn get_aggregate_by_candidate(
        &mut self,
        _id: CandidateId,
    ) -> Result<Option<CandidateTotal>, StoreUnavailable> {
        Err(StoreUnavailable)
    }

    fn count_votes(&mut self, _filter: &VoteFilter) -> Result<u64, StoreUnavailable> {
        Err(StoreUnavailable)
    }

    fn get_votes_by_country(
        &mut self,
        _candidate_slug: Option<&str>,
    ) -> Result<Vec<CountryTotal>, StoreUnavailable> {
        Err(StoreUnavailable)
    }

    fn get_all_aggregates(&mut self) -> Result<Vec<CandidateTotal>, StoreUnavailable> {
        Err(StoreUnavailable)
    }

    fn get_votes_with_region(
        &mut self,
        _country: &str,
    ) -> Result<Vec<VoteWithCandidate>, StoreUnavailable> {
        Err(StoreUnavailable)
    }

    fn list_votes(
        &mut self,
        _filter: &VoteFilter,
    ) -> Result<Vec<VoteWithCandidate>, StoreUnavailable> {
        Err(StoreUnavailable)
    }
}
