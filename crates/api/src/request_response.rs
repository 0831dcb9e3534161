// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are part of the wire contract. The compare response uses
//! `snake_case`; the map and department responses use `camelCase`.

use serde::{Deserialize, Serialize};

/// Query parameters for the map endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapQuery {
    /// Restrict the map to one candidate's slug.
    #[serde(default)]
    pub candidate: Option<String>,
}

/// One country in a candidate's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShare {
    pub country: String,
    pub votes: u64,
    /// Share of the candidate's total, in percent.
    pub percentage: f64,
}

/// API response for a single candidate's comparison card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub photo_url: String,
    pub total_votes: u64,
    /// Share of all votes, in percent.
    pub percentage: f64,
    pub country_count: usize,
    pub top_countries: Vec<CountryShare>,
}

/// One country marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCountry {
    pub lat: f64,
    pub lng: f64,
    pub code: String,
    pub country: String,
    pub total_votes: u64,
    /// Name of the candidate with the most votes in this country.
    pub top_candidate: String,
    /// Share of all mapped votes, in percent.
    pub percentage: f64,
}

/// Totals across every mapped country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapGlobal {
    pub total_votes: u64,
    pub total_countries: usize,
    /// The country with the most votes, or `"N/A"` when there are none.
    pub top_country: String,
}

/// API response for the world map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
    pub countries: Vec<MapCountry>,
    pub global: MapGlobal,
}

/// A candidate's votes within one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCandidate {
    pub id: i64,
    pub name: String,
    pub photo_url: String,
    pub votes: u64,
    /// Share of the department's votes, in percent.
    pub percentage: f64,
}

/// Vote statistics for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    pub department: String,
    pub total_votes: u64,
    /// Share of all home-country votes, in percent.
    pub percentage: f64,
    pub top_candidate: Option<String>,
    pub top_candidate_photo: Option<String>,
    pub top_candidate_votes: u64,
    /// Every candidate with votes here, most votes first.
    pub candidates: Vec<DepartmentCandidate>,
    /// At most five leading candidates.
    pub top_candidates: Vec<DepartmentCandidate>,
    /// Whether the department is one of the official departments.
    pub official: bool,
}

/// Split of home-country votes by whether a region was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub specified: f64,
    pub unspecified: f64,
}

/// Department statistics when at least one home-country vote exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentBreakdown {
    pub departments: Vec<DepartmentStat>,
    pub total_votes: u64,
    pub department_count: usize,
    pub unspecified_count: u64,
    pub coverage: Coverage,
    /// Official departments that have no votes yet.
    pub missing_departments: Vec<String>,
}

/// Payload returned when no home-country votes exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoDepartmentData {
    pub departments: Vec<DepartmentStat>,
    pub total_votes: u64,
    pub message: String,
}

/// The `data` member of a department response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentData {
    NoData(NoDepartmentData),
    Breakdown(DepartmentBreakdown),
}

/// API response for the department breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    pub success: bool,
    pub data: DepartmentData,
}
