// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! World map of votes per country.

use tracing::debug;
use vote_dashboard::{GroupedStat, QueryGateway, aggregate_by_key, country_totals_from_votes};
use vote_dashboard_domain::{Candidate, CountryTotal, CountryVotes, GeoPoint, ReferenceData};

use crate::error::{ApiError, MAP_FAILURE, store_failure};
use crate::request_response::{MapCountry, MapGlobal, MapResponse};

/// Placeholder for the top country of an empty map.
pub const NO_TOP_COUNTRY: &str = "N/A";

/// Builds the map payload, optionally restricted to one candidate.
///
/// Per-country rows come from the precomputed view when it has votes, or
/// from raw ballots collapsed into the same per-(country, candidate)
/// shape. Countries are ordered by descending total.
///
/// # Errors
///
/// Returns `Internal` if the store cannot be read.
pub fn map_data<G: QueryGateway>(
    gateway: &mut G,
    reference: &ReferenceData,
    candidate_slug: Option<&str>,
) -> Result<MapResponse, ApiError> {
    let mut rows: Vec<CountryTotal> = match gateway
        .get_all_country_votes()
        .map_err(store_failure(MAP_FAILURE))?
    {
        CountryVotes::Precomputed(rows) => rows,
        CountryVotes::Raw(ballots) => country_totals_from_votes(&ballots),
    };

    if let Some(slug) = candidate_slug {
        rows.retain(|row| row.candidate.slug == slug);
    }

    let groups: Vec<GroupedStat<String, Candidate>> = aggregate_by_key(
        &rows,
        |row| row.country.clone(),
        &reference.unknown_country_label,
    );

    let total_votes: u64 = groups
        .iter()
        .fold(0, |acc: u64, group| acc.saturating_add(group.total_votes));
    let top_country: String = groups
        .first()
        .map_or_else(|| NO_TOP_COUNTRY.to_string(), |group| group.key.clone());

    let countries: Vec<MapCountry> = groups
        .into_iter()
        .map(|group| {
            let GeoPoint { lat, lng, code } = reference.coordinates(&group.key);
            MapCountry {
                lat,
                lng,
                code,
                top_candidate: group
                    .top_member()
                    .map(|tally| tally.member.name.clone())
                    .unwrap_or_default(),
                total_votes: group.total_votes,
                percentage: group.percentage,
                country: group.key,
            }
        })
        .collect();

    debug!(countries = countries.len(), total_votes, "Computed map data");

    Ok(MapResponse {
        global: MapGlobal {
            total_votes,
            total_countries: countries.len(),
            top_country,
        },
        countries,
    })
}
