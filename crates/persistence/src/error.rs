// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::DatabaseErrorKind;

/// Errors raised by the vote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database file or URL could not be opened.
    Connection(String),
    /// The embedded migrations could not be applied.
    Migration(String),
    /// `SQLite` reported foreign keys as disabled on this connection.
    ForeignKeysDisabled,
    /// The database path is not valid UTF-8.
    InvalidPath(String),
    /// A write broke a unique or foreign key constraint.
    ConstraintViolation(String),
    /// Any other failure reported by the database.
    Database(String),
    /// A seed dataset could not be parsed.
    MalformedDataset(String),
    /// A vote count is too large to store.
    CountOutOfRange(u64),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "Cannot open vote store: {msg}"),
            Self::Migration(msg) => write!(f, "Cannot migrate vote store: {msg}"),
            Self::ForeignKeysDisabled => {
                write!(f, "SQLite foreign key enforcement is disabled")
            }
            Self::InvalidPath(path) => write!(f, "Database path is not valid UTF-8: {path}"),
            Self::ConstraintViolation(msg) => write!(f, "Constraint violation: {msg}"),
            Self::Database(msg) => write!(f, "Vote store error: {msg}"),
            Self::MalformedDataset(msg) => write!(f, "Malformed dataset: {msg}"),
            Self::CountOutOfRange(count) => {
                write!(f, "Vote count {count} does not fit in the database")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation | DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::ConstraintViolation(info.message().to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedDataset(err.to_string())
    }
}
