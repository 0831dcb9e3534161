// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod gateway_tests;
mod initialization_tests;

use vote_dashboard_domain::{Candidate, CandidateId, Vote};

use crate::Persistence;

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

/// Creates a store with two candidates and no ballots.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .insert_candidate(&create_test_candidate(1, "Ced", "ced"))
        .unwrap();
    persistence
        .insert_candidate(&create_test_candidate(2, "Ana", "ana"))
        .unwrap();
    persistence
}
