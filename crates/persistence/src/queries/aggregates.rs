// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Precomputed aggregate queries.
//!
//! The aggregate tables are maintained outside this service and may be
//! stale or empty. Callers decide whether to trust them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use vote_dashboard_domain::{CandidateId, CandidateTotal, CountryTotal};

use crate::data_models::{CandidateTotalRow, CountryTotalJoinedRow, country_total_from_row};
use crate::diesel_schema::{candidates, vote_aggregates, vote_by_country};
use crate::error::PersistenceError;

/// Returns the precomputed total for one candidate.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_aggregate_by_candidate(
    conn: &mut SqliteConnection,
    id: CandidateId,
) -> Result<Option<CandidateTotal>, PersistenceError> {
    let row: Option<CandidateTotalRow> = vote_aggregates::table
        .filter(vote_aggregates::candidate_id.eq(id.value()))
        .select(CandidateTotalRow::as_select())
        .first::<CandidateTotalRow>(conn)
        .optional()?;

    Ok(row.map(CandidateTotalRow::into_total))
}

/// Returns every precomputed per-candidate total.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_all_aggregates(
    conn: &mut SqliteConnection,
) -> Result<Vec<CandidateTotal>, PersistenceError> {
    let rows: Vec<CandidateTotalRow> = vote_aggregates::table
        .order(vote_aggregates::candidate_id.asc())
        .select(CandidateTotalRow::as_select())
        .load::<CandidateTotalRow>(conn)?;

    debug!(rows = rows.len(), "Loaded candidate aggregates");
    Ok(rows.into_iter().map(CandidateTotalRow::into_total).collect())
}

/// Returns the precomputed per-country totals, highest first.
///
/// Rows with equal totals keep their insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `candidate_slug` - Restrict the rows to one candidate
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_votes_by_country(
    conn: &mut SqliteConnection,
    candidate_slug: Option<&str>,
) -> Result<Vec<CountryTotal>, PersistenceError> {
    let mut query = vote_by_country::table
        .left_join(candidates::table.on(candidates::id.eq(vote_by_country::candidate_id)))
        .select((
            vote_by_country::country,
            vote_by_country::candidate_id,
            vote_by_country::candidate_name,
            vote_by_country::candidate_slug,
            vote_by_country::total_votes,
            candidates::photo_url.nullable(),
        ))
        .order((
            vote_by_country::total_votes.desc(),
            vote_by_country::row_id.asc(),
        ))
        .into_boxed();

    if let Some(slug) = candidate_slug {
        query = query.filter(vote_by_country::candidate_slug.eq(slug));
    }

    let rows: Vec<CountryTotalJoinedRow> = query.load::<CountryTotalJoinedRow>(conn)?;
    debug!(rows = rows.len(), "Loaded per-country aggregates");

    Ok(rows.into_iter().map(country_total_from_row).collect())
}
