// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::Cell;

use crate::{ResolvedTotal, TotalSource, compute_fallback_total, precomputed_total, resolve_total};
use vote_dashboard_domain::{CandidateId, CandidateTotal};

#[derive(Debug, PartialEq, Eq)]
struct StoreDown;

fn candidate_total(id: i64, total_votes: u64) -> CandidateTotal {
    CandidateTotal {
        candidate_id: CandidateId::new(id),
        total_votes,
    }
}

#[test]
fn test_zero_aggregates_fall_back_to_raw_count() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 0), candidate_total(2, 0)];

    let total: u64 = compute_fallback_total(&rows, || Ok::<u64, StoreDown>(42)).unwrap();

    assert_eq!(total, 42);
}

#[test]
fn test_zero_aggregates_report_raw_source() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 0)];

    let resolved: ResolvedTotal = resolve_total(&rows, || Ok::<u64, StoreDown>(7)).unwrap();

    assert_eq!(resolved.value, 7);
    assert_eq!(resolved.source, TotalSource::Raw);
}

#[test]
fn test_empty_aggregates_fall_back_to_raw_count() {
    let rows: Vec<CandidateTotal> = Vec::new();

    let resolved: ResolvedTotal = resolve_total(&rows, || Ok::<u64, StoreDown>(3)).unwrap();

    assert_eq!(resolved.value, 3);
    assert_eq!(resolved.source, TotalSource::Raw);
}

#[test]
fn test_nonzero_aggregates_skip_raw_count() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 4), candidate_total(2, 6)];
    let raw_calls: Cell<u32> = Cell::new(0);

    let resolved: ResolvedTotal = resolve_total(&rows, || {
        raw_calls.set(raw_calls.get() + 1);
        Ok::<u64, StoreDown>(999)
    })
    .unwrap();

    assert_eq!(resolved.value, 10);
    assert_eq!(resolved.source, TotalSource::Precomputed);
    assert_eq!(raw_calls.get(), 0);
}

#[test]
fn test_raw_count_called_once_on_fallback() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 0)];
    let raw_calls: Cell<u32> = Cell::new(0);

    let total: u64 = compute_fallback_total(&rows, || {
        raw_calls.set(raw_calls.get() + 1);
        Ok::<u64, StoreDown>(5)
    })
    .unwrap();

    assert_eq!(total, 5);
    assert_eq!(raw_calls.get(), 1);
}

#[test]
fn test_raw_count_error_propagates() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 0)];

    let result: Result<u64, StoreDown> = compute_fallback_total(&rows, || Err(StoreDown));

    assert_eq!(result, Err(StoreDown));
}

#[test]
fn test_both_tiers_empty_resolve_to_zero() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 0)];

    let resolved: ResolvedTotal = resolve_total(&rows, || Ok::<u64, StoreDown>(0)).unwrap();

    assert_eq!(resolved.value, 0);
    assert_eq!(resolved.source, TotalSource::Raw);
}

#[test]
fn test_single_row_filter_total() {
    let row: CandidateTotal = candidate_total(7, 3);

    let total: u64 =
        compute_fallback_total(std::iter::once(&row), || Ok::<u64, StoreDown>(0)).unwrap();

    assert_eq!(total, 3);
}

#[test]
fn test_precomputed_total_is_none_for_zero_sum() {
    let zeros: Vec<CandidateTotal> = vec![candidate_total(1, 0), candidate_total(2, 0)];
    let empty: Vec<CandidateTotal> = Vec::new();

    assert_eq!(precomputed_total(&zeros), None);
    assert_eq!(precomputed_total(&empty), None);
}

#[test]
fn test_precomputed_total_sums_rows() {
    let rows: Vec<CandidateTotal> = vec![candidate_total(1, 0), candidate_total(2, 5)];

    assert_eq!(precomputed_total(&rows), Some(5));
}
