// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use vote_dashboard_domain::{Candidate, CandidateId};

use crate::data_models::CandidateRow;
use crate::diesel_schema::candidates;
use crate::error::PersistenceError;

/// Looks up a candidate by id.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_candidate(
    conn: &mut SqliteConnection,
    id: CandidateId,
) -> Result<Option<Candidate>, PersistenceError> {
    let row: Option<CandidateRow> = candidates::table
        .filter(candidates::id.eq(id.value()))
        .select(CandidateRow::as_select())
        .first::<CandidateRow>(conn)
        .optional()?;

    Ok(row.map(CandidateRow::into_candidate))
}
