// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vote aggregation engine for the vote dashboard.
//!
//! This crate turns flat vote rows (or precomputed aggregate rows) into
//! grouped statistics, and defines the [`QueryGateway`] contract the
//! formatters read through.
//!
//! ## Two-tier reads
//!
//! The store keeps precomputed aggregates that may be stale or empty.
//! A precomputed source is used only when its sum is non-zero; otherwise
//! the raw votes are counted. See [`resolve_total`] and
//! [`QueryGateway::get_all_country_votes`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod gateway;
#[cfg(any(test, feature = "test-util"))]
mod memory;
mod records;

#[cfg(test)]
mod tests;

pub use aggregate::{
    GroupedStat, MemberTally, ResolvedTotal, TotalSource, VoteRecord, aggregate_by_key,
    compute_fallback_total, country_totals_from_votes, percentage, precomputed_total,
    resolve_total, top_n_within_group,
};
pub use gateway::QueryGateway;
#[cfg(any(test, feature = "test-util"))]
pub use memory::InMemoryGateway;
