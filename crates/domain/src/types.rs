// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Display name used for a candidate referenced by a vote but missing
/// from the candidates table.
pub const UNKNOWN_CANDIDATE_NAME: &str = "Unknown";

/// Represents a candidate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(i64);

impl CandidateId {
    /// Creates a new `CandidateId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate on the ballot.
///
/// Candidates are referenced from votes and aggregates by id or slug,
/// never owned by them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate identifier.
    pub id: CandidateId,
    /// The display name.
    pub name: String,
    /// The URL-safe slug used by the map filter and country aggregates.
    pub slug: String,
    /// The photo URL. Empty when the store has none.
    #[serde(default)]
    pub photo_url: String,
}

impl Candidate {
    /// Creates a new `Candidate`.
    ///
    /// # Arguments
    ///
    /// * `id` - The candidate identifier
    /// * `name` - The display name
    /// * `slug` - The URL-safe slug
    /// * `photo_url` - The photo URL (empty when unknown)
    #[must_use]
    pub fn new(id: CandidateId, name: &str, slug: &str, photo_url: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            photo_url: photo_url.to_string(),
        }
    }

    /// Placeholder for a candidate id with no matching candidate row.
    #[must_use]
    pub fn unknown(id: CandidateId) -> Self {
        Self {
            id,
            name: String::from(UNKNOWN_CANDIDATE_NAME),
            slug: String::new(),
            photo_url: String::new(),
        }
    }
}

/// A single ballot.
///
/// Votes are immutable once created and owned by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The vote identifier.
    pub id: i64,
    /// The candidate this ballot was cast for.
    pub candidate_id: CandidateId,
    /// The country the ballot was cast from, if recorded.
    pub country: Option<String>,
    /// The administrative region within the country, if recorded.
    pub region: Option<String>,
}

impl Vote {
    /// Creates a new `Vote`.
    ///
    /// Blank country and region values are normalized to `None`.
    #[must_use]
    pub fn new(
        id: i64,
        candidate_id: CandidateId,
        country: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        Self {
            id,
            candidate_id,
            country: non_blank(country),
            region: non_blank(region),
        }
    }
}

/// A vote joined with the candidate it was cast for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteWithCandidate {
    /// The ballot.
    pub vote: Vote,
    /// The candidate, or `Candidate::unknown` if the join found no row.
    pub candidate: Candidate,
}

/// Precomputed vote total for a single candidate.
///
/// This is a cache of the votes table and may be stale or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTotal {
    /// The candidate identifier.
    pub candidate_id: CandidateId,
    /// The cached vote count.
    pub total_votes: u64,
}

/// Precomputed vote total for a candidate within one country.
///
/// This is a cache of the votes table and may be stale or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTotal {
    /// The country, if recorded.
    pub country: Option<String>,
    /// The candidate the votes were cast for.
    pub candidate: Candidate,
    /// The cached vote count.
    pub total_votes: u64,
}

/// Filter for direct vote counts and raw vote reads.
///
/// An empty filter matches every vote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteFilter {
    /// Restrict to a single candidate.
    pub candidate_id: Option<CandidateId>,
    /// Restrict to a single country.
    pub country: Option<String>,
}

impl VoteFilter {
    /// A filter matching every vote.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter matching the votes of one candidate.
    #[must_use]
    pub const fn for_candidate(candidate_id: CandidateId) -> Self {
        Self {
            candidate_id: Some(candidate_id),
            country: None,
        }
    }

    /// A filter matching the votes cast from one country.
    #[must_use]
    pub fn for_country(country: &str) -> Self {
        Self {
            candidate_id: None,
            country: Some(country.to_string()),
        }
    }
}

/// Result of the two-tier country read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryVotes {
    /// The precomputed per-country view had a non-zero total.
    Precomputed(Vec<CountryTotal>),
    /// The view was empty; these are the raw ballots.
    Raw(Vec<VoteWithCandidate>),
}

/// Trims a value and maps blank strings to `None`.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
