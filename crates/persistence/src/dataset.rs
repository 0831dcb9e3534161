// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use vote_dashboard_domain::{Candidate, CandidateId, CandidateTotal, CountryTotal, Vote};

use crate::error::PersistenceError;

/// A precomputed per-country row as it appears in a seed file.
///
/// The candidate's name and slug are taken from the dataset's candidate
/// list when the row is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTotalSeed {
    #[serde(default)]
    pub country: Option<String>,
    pub candidate_id: CandidateId,
    pub total_votes: u64,
}

/// A complete set of rows to load into an empty store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub candidate_totals: Vec<CandidateTotal>,
    #[serde(default)]
    pub country_totals: Vec<CountryTotalSeed>,
}

impl Dataset {
    /// Parses a dataset from JSON.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDataset` if the JSON does not describe a dataset.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves a seed row against the dataset's candidates.
    #[must_use]
    pub fn country_total(&self, seed: &CountryTotalSeed) -> CountryTotal {
        let candidate: Candidate = self
            .candidates
            .iter()
            .find(|c| c.id == seed.candidate_id)
            .cloned()
            .unwrap_or_else(|| Candidate::unknown(seed.candidate_id));

        CountryTotal {
            country: seed.country.clone(),
            candidate,
            total_votes: seed.total_votes,
        }
    }
}
