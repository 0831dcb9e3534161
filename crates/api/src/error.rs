// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tracing::error;

/// Generic message for a failed compare request.
pub const COMPARE_FAILURE: &str = "Failed to fetch compare data";
/// Generic message for a failed map request.
pub const MAP_FAILURE: &str = "Failed to fetch map data";
/// Generic message for a failed department request.
pub const DEPARTMENTS_FAILURE: &str = "Failed to fetch department statistics";

/// API-level errors.
///
/// These are distinct from store errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Returns a mapper that logs a store error and hides it behind `message`.
pub(crate) fn store_failure<E: std::error::Error>(
    message: &'static str,
) -> impl FnOnce(E) -> ApiError {
    move |err: E| {
        error!(error = %err, "{}", message);
        ApiError::Internal {
            message: message.to_string(),
        }
    }
}
