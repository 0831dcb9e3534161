// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vote_dashboard::QueryGateway;
use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, CountryVotes, UNKNOWN_CANDIDATE_NAME,
    VoteFilter, VoteWithCandidate,
};

use crate::Persistence;
use crate::tests::{create_test_candidate, create_test_persistence, create_test_vote};

fn seed_votes(persistence: &mut Persistence) {
    let ballots: [(i64, i64, Option<&str>); 5] = [
        (1, 1, Some("Haiti")),
        (2, 2, Some("Haiti")),
        (3, 1, Some("Canada")),
        (4, 1, None),
        (5, 2, Some("Haiti")),
    ];
    for (id, candidate, country) in ballots {
        persistence
            .insert_vote(&create_test_vote(id, candidate, country))
            .unwrap();
    }
}

#[test]
fn test_get_candidate() {
    let mut persistence: Persistence = create_test_persistence();

    let candidate: Option<Candidate> = persistence.get_candidate(CandidateId::new(1)).unwrap();
    assert_eq!(candidate, Some(create_test_candidate(1, "Ced", "ced")));

    assert!(
        persistence
            .get_candidate(CandidateId::new(404))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_candidate_without_photo_gets_empty_url() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .insert_candidate(&Candidate::new(CandidateId::new(3), "Lia", "lia", ""))
        .unwrap();

    let candidate: Candidate = persistence
        .get_candidate(CandidateId::new(3))
        .unwrap()
        .unwrap();

    assert_eq!(candidate.photo_url, "");
}

#[test]
fn test_count_votes_with_filters() {
    let mut persistence: Persistence = create_test_persistence();
    seed_votes(&mut persistence);

    assert_eq!(persistence.count_votes(&VoteFilter::all()).unwrap(), 5);
    assert_eq!(
        persistence
            .count_votes(&VoteFilter::for_candidate(CandidateId::new(2)))
            .unwrap(),
        2
    );
    assert_eq!(
        persistence
            .count_votes(&VoteFilter::for_country("Haiti"))
            .unwrap(),
        3
    );

    let both: VoteFilter = VoteFilter {
        candidate_id: Some(CandidateId::new(1)),
        country: Some(String::from("Haiti")),
    };
    assert_eq!(persistence.count_votes(&both).unwrap(), 1);
}

#[test]
fn test_list_votes_joins_candidates_in_id_order() {
    let mut persistence: Persistence = create_test_persistence();
    seed_votes(&mut persistence);

    let rows: Vec<VoteWithCandidate> = persistence.list_votes(&VoteFilter::all()).unwrap();

    let ids: Vec<i64> = rows.iter().map(|r| r.vote.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(rows[1].candidate.name, "Ana");
    assert_eq!(rows[1].candidate.photo_url, "https://example.org/ana.jpg");
    assert!(rows[3].vote.country.is_none());
}

#[test]
fn test_votes_with_region() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .insert_vote(&vote_dashboard_domain::Vote::new(
            1,
            CandidateId::new(1),
            Some("Haiti"),
            Some("Ouest"),
        ))
        .unwrap();
    persistence
        .insert_vote(&vote_dashboard_domain::Vote::new(
            2,
            CandidateId::new(2),
            Some("Haiti"),
            Some("   "),
        ))
        .unwrap();
    persistence
        .insert_vote(&create_test_vote(3, 2, Some("France")))
        .unwrap();

    let rows: Vec<VoteWithCandidate> = persistence.get_votes_with_region("Haiti").unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].vote.region.as_deref(), Some("Ouest"));
    assert!(rows[1].vote.region.is_none());
}

#[test]
fn test_aggregates_round_trip() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .upsert_candidate_total(&CandidateTotal {
            candidate_id: CandidateId::new(1),
            total_votes: 4,
        })
        .unwrap();
    persistence
        .upsert_candidate_total(&CandidateTotal {
            candidate_id: CandidateId::new(1),
            total_votes: 9,
        })
        .unwrap();

    let total: Option<CandidateTotal> = persistence
        .get_aggregate_by_candidate(CandidateId::new(1))
        .unwrap();
    assert_eq!(total.map(|t| t.total_votes), Some(9));
    assert_eq!(persistence.get_all_aggregates().unwrap().len(), 1);
    assert!(
        persistence
            .get_aggregate_by_candidate(CandidateId::new(2))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_votes_by_country_sorted_and_filtered() {
    let mut persistence: Persistence = create_test_persistence();
    let ced: Candidate = create_test_candidate(1, "Ced", "ced");
    let ana: Candidate = create_test_candidate(2, "Ana", "ana");

    for (country, candidate, total) in [
        (Some("Canada"), &ced, 2_u64),
        (Some("Haiti"), &ana, 9),
        (Some("Haiti"), &ced, 5),
        (None, &ced, 5),
    ] {
        persistence
            .insert_country_total(&CountryTotal {
                country: country.map(ToString::to_string),
                candidate: candidate.clone(),
                total_votes: total,
            })
            .unwrap();
    }

    let all: Vec<CountryTotal> = persistence.get_votes_by_country(None).unwrap();
    let totals: Vec<u64> = all.iter().map(|r| r.total_votes).collect();
    assert_eq!(totals, vec![9, 5, 5, 2]);
    assert_eq!(all[1].country.as_deref(), Some("Haiti"));
    assert!(all[2].country.is_none());
    assert_eq!(all[0].candidate.photo_url, "https://example.org/ana.jpg");

    let ced_rows: Vec<CountryTotal> = persistence.get_votes_by_country(Some("ced")).unwrap();
    assert_eq!(ced_rows.len(), 3);
    assert!(ced_rows.iter().all(|r| r.candidate.slug == "ced"));
}

#[test]
fn test_all_country_votes_uses_view_when_populated() {
    let mut persistence: Persistence = create_test_persistence();
    seed_votes(&mut persistence);
    persistence
        .insert_country_total(&CountryTotal {
            country: Some(String::from("Haiti")),
            candidate: create_test_candidate(1, "Ced", "ced"),
            total_votes: 12,
        })
        .unwrap();

    match persistence.get_all_country_votes().unwrap() {
        CountryVotes::Precomputed(rows) => assert_eq!(rows.len(), 1),
        CountryVotes::Raw(_) => panic!("expected precomputed rows"),
    }
}

#[test]
fn test_all_country_votes_falls_back_to_ballots() {
    let mut persistence: Persistence = create_test_persistence();
    seed_votes(&mut persistence);

    match persistence.get_all_country_votes().unwrap() {
        CountryVotes::Raw(rows) => assert_eq!(rows.len(), 5),
        CountryVotes::Precomputed(_) => panic!("expected raw rows"),
    }
}

#[test]
fn test_country_row_for_unknown_candidate() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .insert_country_total(&CountryTotal {
            country: Some(String::from("Chile")),
            candidate: Candidate::unknown(CandidateId::new(77)),
            total_votes: 1,
        })
        .unwrap();

    let rows: Vec<CountryTotal> = persistence.get_votes_by_country(None).unwrap();

    assert_eq!(rows[0].candidate.name, UNKNOWN_CANDIDATE_NAME);
    assert_eq!(rows[0].candidate.photo_url, "");
}
