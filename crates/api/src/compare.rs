// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-candidate comparison card.

use tracing::{debug, info};
use vote_dashboard::{
    GroupedStat, QueryGateway, ResolvedTotal, TotalSource, aggregate_by_key, percentage,
    precomputed_total, resolve_total,
};
use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, VoteFilter, VoteWithCandidate,
};

use crate::error::{ApiError, COMPARE_FAILURE, store_failure};
use crate::request_response::{CompareResponse, CountryShare};

/// Label for breakdown rows without a country.
const UNKNOWN_COUNTRY: &str = "Unknown";

/// Parses a candidate id from a path segment.
///
/// # Errors
///
/// Returns `InvalidInput` unless the whole segment is an integer.
pub fn parse_candidate_id(raw: &str) -> Result<CandidateId, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map(CandidateId::new)
        .map_err(|_| ApiError::InvalidInput {
            field: String::from("id"),
            message: format!("'{raw}' is not a candidate id"),
        })
}

/// A candidate's per-country votes and the tier they were read from.
struct CountryBreakdown {
    groups: Vec<GroupedStat<String, Candidate>>,
    source: TotalSource,
}

impl CountryBreakdown {
    fn total(&self) -> u64 {
        self.groups
            .iter()
            .fold(0, |acc: u64, group| acc.saturating_add(group.total_votes))
    }
}

fn country_breakdown<G: QueryGateway>(
    gateway: &mut G,
    candidate: &Candidate,
) -> Result<CountryBreakdown, G::Error> {
    let placeholder: String = String::from(UNKNOWN_COUNTRY);
    let view: Vec<CountryTotal> = gateway.get_votes_by_country(Some(candidate.slug.as_str()))?;

    if precomputed_total(&view).is_some() {
        return Ok(CountryBreakdown {
            groups: aggregate_by_key(&view, |row| row.country.clone(), &placeholder),
            source: TotalSource::Precomputed,
        });
    }

    info!(
        candidate = candidate.id.value(),
        "Country view is empty for candidate, counting raw votes"
    );
    let ballots: Vec<VoteWithCandidate> =
        gateway.list_votes(&VoteFilter::for_candidate(candidate.id))?;
    Ok(CountryBreakdown {
        groups: aggregate_by_key(&ballots, |row| row.vote.country.clone(), &placeholder),
        source: TotalSource::Raw,
    })
}

/// Builds the comparison card for one candidate.
///
/// The candidate's total is its precomputed aggregate, or its raw vote
/// count when the aggregate is missing or zero. The global denominator is
/// read from the same tier as the candidate's total.
///
/// Country percentages are shares of the candidate's total when the
/// country breakdown comes from the same tier. When it comes from the
/// other tier, they are shares of the breakdown's own sum, so they never
/// exceed 100%.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no candidate has this id, and `Internal`
/// if the store cannot be read.
pub fn compare_candidate<G: QueryGateway>(
    gateway: &mut G,
    id: CandidateId,
) -> Result<CompareResponse, ApiError> {
    let candidate: Candidate = gateway
        .get_candidate(id)
        .map_err(store_failure(COMPARE_FAILURE))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Candidate"),
            message: format!("No candidate with id {id}"),
        })?;

    let own_row: Option<CandidateTotal> = gateway
        .get_aggregate_by_candidate(id)
        .map_err(store_failure(COMPARE_FAILURE))?;
    let candidate_total: ResolvedTotal = resolve_total(own_row.iter(), || {
        gateway.count_votes(&VoteFilter::for_candidate(id))
    })
    .map_err(store_failure(COMPARE_FAILURE))?;

    let global_total: u64 = match candidate_total.source {
        TotalSource::Raw => gateway
            .count_votes(&VoteFilter::all())
            .map_err(store_failure(COMPARE_FAILURE))?,
        TotalSource::Precomputed => {
            let all_rows: Vec<CandidateTotal> = gateway
                .get_all_aggregates()
                .map_err(store_failure(COMPARE_FAILURE))?;
            resolve_total(all_rows.iter(), || gateway.count_votes(&VoteFilter::all()))
                .map_err(store_failure(COMPARE_FAILURE))?
                .value
        }
    };

    let breakdown: CountryBreakdown =
        country_breakdown(gateway, &candidate).map_err(store_failure(COMPARE_FAILURE))?;
    // A breakdown from the other tier is measured against its own sum.
    let country_denominator: u64 = if breakdown.source == candidate_total.source {
        candidate_total.value
    } else {
        breakdown.total()
    };

    let top_countries: Vec<CountryShare> = breakdown
        .groups
        .into_iter()
        .map(|group| CountryShare {
            percentage: percentage(group.total_votes, country_denominator),
            votes: group.total_votes,
            country: group.key,
        })
        .collect();

    debug!(
        candidate = id.value(),
        total = candidate_total.value,
        global = global_total,
        countries = top_countries.len(),
        "Computed compare card"
    );

    Ok(CompareResponse {
        id: candidate.id.value(),
        name: candidate.name,
        slug: candidate.slug,
        photo_url: candidate.photo_url,
        total_votes: candidate_total.value,
        percentage: percentage(candidate_total.value, global_total),
        country_count: top_countries.len(),
        top_countries,
    })
}
