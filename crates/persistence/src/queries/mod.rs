// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `candidates`: Candidate lookups
//! - `votes`: Raw ballot counts and joined ballot listings
//! - `aggregates`: Precomputed per-candidate and per-country totals

pub mod aggregates;
pub mod candidates;
pub mod votes;

pub use aggregates::{get_aggregate_by_candidate, get_all_aggregates, get_votes_by_country};
pub use candidates::get_candidate;
pub use votes::{count_votes, list_votes};
