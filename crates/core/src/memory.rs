// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory `QueryGateway` for tests. Only built with the `test-util`
//! feature.

use std::convert::Infallible;

use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, Vote, VoteFilter, VoteWithCandidate,
};

use crate::gateway::QueryGateway;

/// A vote store held entirely in memory.
///
/// The precomputed tables are stored independently of the votes, so they
/// can be made stale or left empty to exercise the fallback paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    candidates: Vec<Candidate>,
    votes: Vec<Vote>,
    candidate_totals: Vec<CandidateTotal>,
    country_totals: Vec<CountryTotal>,
}

impl InMemoryGateway {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate.
    #[must_use]
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Adds a raw vote.
    #[must_use]
    pub fn with_vote(mut self, vote: Vote) -> Self {
        self.votes.push(vote);
        self
    }

    /// Adds a precomputed per-candidate total.
    #[must_use]
    pub fn with_candidate_total(mut self, total: CandidateTotal) -> Self {
        self.candidate_totals.push(total);
        self
    }

    /// Adds a precomputed per-country total.
    #[must_use]
    pub fn with_country_total(mut self, total: CountryTotal) -> Self {
        self.country_totals.push(total);
        self
    }

    fn candidate_for(&self, id: CandidateId) -> Candidate {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_else(|| Candidate::unknown(id))
    }

    fn matches(vote: &Vote, filter: &VoteFilter) -> bool {
        filter.candidate_id.is_none_or(|id| vote.candidate_id == id)
            && filter
                .country
                .as_deref()
                .is_none_or(|country| vote.country.as_deref() == Some(country))
    }

    fn joined(&self, filter: &VoteFilter) -> Vec<VoteWithCandidate> {
        self.votes
            .iter()
            .filter(|vote| Self::matches(vote, filter))
            .map(|vote| VoteWithCandidate {
                vote: vote.clone(),
                candidate: self.candidate_for(vote.candidate_id),
            })
            .collect()
    }
}

impl QueryGateway for InMemoryGateway {
    type Error = Infallible;

    fn get_candidate(&mut self, id: CandidateId) -> Result<Option<Candidate>, Infallible> {
        Ok(self.candidates.iter().find(|c| c.id == id).cloned())
    }

    fn get_aggregate_by_candidate(
        &mut self,
        id: CandidateId,
    ) -> Result<Option<CandidateTotal>, Infallible> {
        Ok(self
            .candidate_totals
            .iter()
            .find(|t| t.candidate_id == id)
            .copied())
    }

    fn count_votes(&mut self, filter: &VoteFilter) -> Result<u64, Infallible> {
        Ok(self
            .votes
            .iter()
            .filter(|vote| Self::matches(vote, filter))
            .count() as u64)
    }

    fn get_votes_by_country(
        &mut self,
        candidate_slug: Option<&str>,
    ) -> Result<Vec<CountryTotal>, Infallible> {
        let mut rows: Vec<CountryTotal> = self
            .country_totals
            .iter()
            .filter(|row| candidate_slug.is_none_or(|slug| row.candidate.slug == slug))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));
        Ok(rows)
    }

    fn get_all_aggregates(&mut self) -> Result<Vec<CandidateTotal>, Infallible> {
        Ok(self.candidate_totals.clone())
    }

    fn get_votes_with_region(
        &mut self,
        country: &str,
    ) -> Result<Vec<VoteWithCandidate>, Infallible> {
        Ok(self.joined(&VoteFilter::for_country(country)))
    }

    fn list_votes(&mut self, filter: &VoteFilter) -> Result<Vec<VoteWithCandidate>, Infallible> {
        Ok(self.joined(filter))
    }
}
