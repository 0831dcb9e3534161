// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Connection setup for the `SQLite` vote store.
//!
//! Diesel has no DSL for PRAGMA statements or `last_insert_rowid()`, so
//! those are issued as raw SQL here and nowhere else.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Migrations creating the candidate, ballot, and aggregate tables.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalModePragma {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Opens `database_url`, turns on foreign keys, and applies pending
/// migrations.
///
/// # Errors
///
/// Returns `Connection` if the database cannot be opened, and `Migration`
/// if the schema cannot be brought up to date.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening vote store");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::Migration(e.to_string()))?
        .len();
    debug!(applied, "Applied vote store migrations");

    Ok(conn)
}

/// Confirms the connection enforces foreign keys, so ballots cannot
/// reference a missing candidate.
///
/// # Errors
///
/// Returns `ForeignKeysDisabled` if enforcement is off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeysDisabled);
    }
    Ok(())
}

/// Switches a file-backed database to write-ahead logging.
///
/// # Errors
///
/// Returns an error if the PRAGMA fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: JournalModePragma =
        diesel::sql_query("PRAGMA journal_mode = WAL").get_result(conn)?;
    debug!(journal_mode = %pragma.journal_mode, "Set journal mode");
    Ok(())
}

/// Returns the row id assigned by the most recent insert on `conn`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
