// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response formatters for the vote dashboard.
//!
//! Each formatter reads through a [`vote_dashboard::QueryGateway`], runs
//! the aggregation engine, and returns a response DTO. Formatters never
//! write to the store and never return partial data: a failed read turns
//! the whole request into an [`ApiError::Internal`] carrying a generic
//! message, with the underlying cause logged.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod compare;
mod departments;
mod error;
mod map;
mod request_response;

#[cfg(test)]
mod tests;

pub use compare::{compare_candidate, parse_candidate_id};
pub use departments::{TOP_CANDIDATES_PER_DEPARTMENT, department_breakdown};
pub use error::{ApiError, COMPARE_FAILURE, DEPARTMENTS_FAILURE, MAP_FAILURE};
pub use map::{NO_TOP_COUNTRY, map_data};
pub use request_response::{
    CompareResponse, CountryShare, Coverage, DepartmentBreakdown, DepartmentCandidate,
    DepartmentData, DepartmentStat, DepartmentsResponse, MapCountry, MapGlobal, MapQuery,
    MapResponse, NoDepartmentData,
};
