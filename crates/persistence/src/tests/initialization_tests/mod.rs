// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test opens an in-memory store, so connection
//! setup and migrations are covered implicitly. These tests pin down the
//! properties the server relies on at startup.

use vote_dashboard::QueryGateway;
use vote_dashboard_domain::VoteFilter;

use crate::Persistence;
use crate::error::PersistenceError;
use crate::tests::{create_test_candidate, create_test_vote};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_vote_for_missing_candidate_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<(), PersistenceError> =
        persistence.insert_vote(&create_test_vote(1, 99, Some("Haiti")));

    assert!(matches!(result, Err(PersistenceError::ConstraintViolation(_))));
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = Persistence::new_in_memory().unwrap();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    db1.insert_candidate(&create_test_candidate(1, "Ced", "ced"))
        .unwrap();
    db1.insert_vote(&create_test_vote(1, 1, Some("Haiti")))
        .unwrap();

    assert_eq!(db1.count_votes(&VoteFilter::all()).unwrap(), 1);
    assert_eq!(db2.count_votes(&VoteFilter::all()).unwrap(), 0);
}

#[test]
fn test_file_backed_store_persists_between_opens() {
    let path = std::env::temp_dir().join(format!(
        "vote_dashboard_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .insert_candidate(&create_test_candidate(1, "Ced", "ced"))
            .unwrap();
        persistence
            .insert_vote(&create_test_vote(1, 1, Some("Haiti")))
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.count_votes(&VoteFilter::all()).unwrap(), 1);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
