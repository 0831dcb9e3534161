// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read contract for the backing vote store.
//!
//! The gateway is the single boundary where store rows become strict
//! domain types. Implementations must default or reject malformed rows
//! before returning them; the formatters never see partial rows.

use tracing::info;
use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, CountryVotes, VoteFilter,
    VoteWithCandidate,
};

use crate::aggregate::precomputed_total;

/// Read-only access to candidates, votes, and precomputed aggregates.
///
/// Every read is attempted once; implementations must not retry.
pub trait QueryGateway {
    /// The error produced when the store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Looks up a candidate by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_candidate(&mut self, id: CandidateId) -> Result<Option<Candidate>, Self::Error>;

    /// Returns the precomputed total for a candidate, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_aggregate_by_candidate(
        &mut self,
        id: CandidateId,
    ) -> Result<Option<CandidateTotal>, Self::Error>;

    /// Counts raw votes matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn count_votes(&mut self, filter: &VoteFilter) -> Result<u64, Self::Error>;

    /// Returns precomputed per-country totals, ordered by descending total.
    ///
    /// # Arguments
    ///
    /// * `candidate_slug` - Restrict the rows to one candidate
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_votes_by_country(
        &mut self,
        candidate_slug: Option<&str>,
    ) -> Result<Vec<CountryTotal>, Self::Error>;

    /// Returns every precomputed per-candidate total.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_all_aggregates(&mut self) -> Result<Vec<CandidateTotal>, Self::Error>;

    /// Returns the votes cast from one country, joined with their candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_votes_with_region(
        &mut self,
        country: &str,
    ) -> Result<Vec<VoteWithCandidate>, Self::Error>;

    /// Returns raw votes matching a filter, joined with their candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_votes(&mut self, filter: &VoteFilter) -> Result<Vec<VoteWithCandidate>, Self::Error>;

    /// Reads per-country votes from the precomputed view, or from the raw
    /// votes when the view sums to zero.
    ///
    /// The two tiers are never mixed: either every returned row is
    /// precomputed or every row is a raw ballot.
    ///
    /// # Errors
    ///
    /// Returns an error if either tier cannot be read.
    fn get_all_country_votes(&mut self) -> Result<CountryVotes, Self::Error> {
        let view: Vec<CountryTotal> = self.get_votes_by_country(None)?;

        if precomputed_total(&view).is_some() {
            return Ok(CountryVotes::Precomputed(view));
        }

        info!("Country view is empty, falling back to raw votes");
        Ok(CountryVotes::Raw(self.list_votes(&VoteFilter::all())?))
    }
}
