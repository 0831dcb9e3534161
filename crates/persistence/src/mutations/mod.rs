// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for the persistence layer.
//!
//! The HTTP surface is read-only. These writes exist to seed a store for
//! tests and for the server's development `--seed` option.
//!
//! ## Module Organization
//!
//! - `seed`: Candidate, ballot, and aggregate inserts

pub mod seed;

pub use seed::{insert_candidate, insert_country_total, insert_vote, upsert_candidate_total};
