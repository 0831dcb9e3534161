// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and the conversion from stored rows to domain types.
//!
//! This is the only place where loosely typed store rows become strict
//! domain values. Every defaulting rule lives here:
//!
//! - negative or missing counts become `0`
//! - a missing photo becomes `""`
//! - a vote whose candidate row is missing joins `Candidate::unknown`
//! - blank countries and regions become `None`

use diesel::prelude::*;
use num_traits::ToPrimitive;
use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, UNKNOWN_CANDIDATE_NAME, Vote,
    VoteWithCandidate, non_blank,
};

use crate::diesel_schema::{candidates, vote_aggregates, vote_by_country, votes};

/// Converts a stored count to a vote count, clamping negatives to zero.
#[must_use]
pub fn clamp_count(raw: i64) -> u64 {
    raw.to_u64().unwrap_or(0)
}

/// A row of the `candidates` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = candidates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CandidateRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub photo_url: Option<String>,
}

impl CandidateRow {
    pub fn into_candidate(self) -> Candidate {
        Candidate::new(
            CandidateId::new(self.id),
            &self.name,
            &self.slug,
            self.photo_url.as_deref().unwrap_or_default(),
        )
    }
}

impl From<&Candidate> for CandidateRow {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.value(),
            name: candidate.name.clone(),
            slug: candidate.slug.clone(),
            photo_url: non_blank(Some(candidate.photo_url.as_str())),
        }
    }
}

/// A row of the `votes` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = votes)]
pub struct VoteRow {
    pub id: i64,
    pub candidate_id: i64,
    pub country: Option<String>,
    pub region: Option<String>,
}

impl From<&Vote> for VoteRow {
    fn from(vote: &Vote) -> Self {
        Self {
            id: vote.id,
            candidate_id: vote.candidate_id.value(),
            country: non_blank(vote.country.as_deref()),
            region: non_blank(vote.region.as_deref()),
        }
    }
}

/// A row of the `vote_aggregates` table.
#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = vote_aggregates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CandidateTotalRow {
    pub candidate_id: i64,
    pub total_votes: i64,
}

impl CandidateTotalRow {
    pub fn into_total(self) -> CandidateTotal {
        CandidateTotal {
            candidate_id: CandidateId::new(self.candidate_id),
            total_votes: clamp_count(self.total_votes),
        }
    }
}

/// A new row for the `vote_by_country` table. The row id is assigned by
/// the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = vote_by_country)]
pub struct NewCountryTotalRow {
    pub country: Option<String>,
    pub candidate_id: i64,
    pub candidate_name: Option<String>,
    pub candidate_slug: Option<String>,
    pub total_votes: i64,
}

/// A vote left-joined with its candidate.
///
/// Columns: vote id, candidate id, country, region, candidate name,
/// candidate slug, candidate photo.
pub type JoinedVoteRow = (
    i64,
    i64,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Converts a joined vote row into a vote paired with its candidate.
pub fn joined_vote_from_row(row: JoinedVoteRow) -> VoteWithCandidate {
    let (id, candidate_id, country, region, name, slug, photo_url) = row;
    let vote: Vote = Vote::new(
        id,
        CandidateId::new(candidate_id),
        country.as_deref(),
        region.as_deref(),
    );
    let candidate: Candidate = name.map_or_else(
        || Candidate::unknown(vote.candidate_id),
        |name| {
            Candidate::new(
                vote.candidate_id,
                &name,
                slug.as_deref().unwrap_or_default(),
                photo_url.as_deref().unwrap_or_default(),
            )
        },
    );
    VoteWithCandidate { vote, candidate }
}

/// A per-country row left-joined with the candidates table for the photo.
///
/// Columns: country, candidate id, candidate name, candidate slug,
/// total votes, candidate photo.
pub type CountryTotalJoinedRow = (
    Option<String>,
    i64,
    Option<String>,
    Option<String>,
    i64,
    Option<String>,
);

/// Converts a per-country row into a domain `CountryTotal`.
pub fn country_total_from_row(row: CountryTotalJoinedRow) -> CountryTotal {
    let (country, candidate_id, name, slug, total_votes, photo_url) = row;
    CountryTotal {
        country: non_blank(country.as_deref()),
        candidate: Candidate::new(
            CandidateId::new(candidate_id),
            name.as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(UNKNOWN_CANDIDATE_NAME),
            slug.as_deref().unwrap_or_default(),
            photo_url.as_deref().unwrap_or_default(),
        ),
        total_votes: clamp_count(total_votes),
    }
}
