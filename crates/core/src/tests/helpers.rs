// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vote_dashboard_domain::{Candidate, CandidateId, CountryTotal, Vote, VoteWithCandidate};

pub fn create_test_candidate(id: i64, name: &str, slug: &str) -> Candidate {
    Candidate::new(
        CandidateId::new(id),
        name,
        slug,
        &format!("https://example.org/{slug}.jpg"),
    )
}

pub fn create_test_vote(id: i64, candidate_id: i64, country: Option<&str>) -> Vote {
    Vote::new(id, CandidateId::new(candidate_id), country, None)
}

pub fn create_test_ballot(
    id: i64,
    candidate: &Candidate,
    country: Option<&str>,
    region: Option<&str>,
) -> VoteWithCandidate {
    VoteWithCandidate {
        vote: Vote::new(id, candidate.id, country, region),
        candidate: candidate.clone(),
    }
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

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
