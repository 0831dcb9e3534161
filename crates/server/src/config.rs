// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup configuration files.
//!
//! Both files are read once before the server starts listening. A bad
//! file stops startup; nothing is reloaded at runtime.

use std::path::Path;

use thiserror::Error;
use tracing::info;
use vote_dashboard_domain::{DomainError, ReferenceData};
use vote_dashboard_persistence::{Dataset, PersistenceError};

/// Errors raised while loading startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The reference data file is not valid JSON for reference data.
    #[error("Invalid reference data in {path}: {source}")]
    ParseReference {
        path: String,
        source: serde_json::Error,
    },

    /// The reference data parsed but breaks a domain rule.
    #[error("Reference data rejected: {0}")]
    InvalidReference(#[from] DomainError),

    /// The seed file is not a valid dataset.
    #[error("Invalid seed dataset in {path}: {source}")]
    ParseSeed {
        path: String,
        source: PersistenceError,
    },
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Loads reference data from `path`, or the built-in tables when no path
/// is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_reference_data(path: Option<&Path>) -> Result<ReferenceData, ConfigError> {
    let Some(path) = path else {
        info!("Using built-in reference data");
        return Ok(ReferenceData::default());
    };

    let contents: String = read_file(path)?;
    let reference: ReferenceData =
        serde_json::from_str(&contents).map_err(|source| ConfigError::ParseReference {
            path: path.display().to_string(),
            source,
        })?;
    reference.validate()?;

    info!(
        path = %path.display(),
        departments = reference.departments.len(),
        countries = reference.countries.len(),
        "Loaded reference data"
    );
    Ok(reference)
}

/// Loads a seed dataset from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a dataset.
pub fn load_seed(path: &Path) -> Result<Dataset, ConfigError> {
    let contents: String = read_file(path)?;
    Dataset::from_json(&contents).map_err(|source| ConfigError::ParseSeed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path: PathBuf =
            std::env::temp_dir().join(format!("{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_reference_data_without_path() {
        let reference: ReferenceData = load_reference_data(None).unwrap();
        assert_eq!(reference, ReferenceData::default());
    }

    #[test]
    fn test_reference_data_from_file() {
        let mut reference: ReferenceData = ReferenceData::default();
        reference.home_country = String::from("France");
        let path: PathBuf = write_temp(
            "reference_ok.json",
            &serde_json::to_string(&reference).unwrap(),
        );

        let loaded: ReferenceData = load_reference_data(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.home_country, "France");
    }

    #[test]
    fn test_invalid_reference_data_is_rejected() {
        let mut reference: ReferenceData = ReferenceData::default();
        reference.departments.push(String::from("Ouest"));
        let path: PathBuf = write_temp(
            "reference_dup.json",
            &serde_json::to_string(&reference).unwrap(),
        );

        let result: Result<ReferenceData, ConfigError> = load_reference_data(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::InvalidReference(_))));
    }

    #[test]
    fn test_malformed_reference_json() {
        let path: PathBuf = write_temp("reference_bad.json", "[1, 2");

        let result: Result<ReferenceData, ConfigError> = load_reference_data(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ParseReference { .. })));
    }

    #[test]
    fn test_missing_file() {
        let path: PathBuf = std::env::temp_dir().join("vote_dashboard_no_such_file.json");

        let result: Result<Dataset, ConfigError> = load_seed(&path);

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_seed_from_file() {
        let path: PathBuf = write_temp(
            "seed_ok.json",
            r#"{ "candidates": [ { "id": 1, "name": "Ced", "slug": "ced" } ] }"#,
        );

        let dataset: Dataset = load_seed(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dataset.candidates.len(), 1);
        assert!(dataset.votes.is_empty());
    }

    #[test]
    fn test_malformed_seed() {
        let path: PathBuf = write_temp("seed_bad.json", r#"{ "votes": 3 }"#);

        let result: Result<Dataset, ConfigError> = load_seed(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ParseSeed { .. })));
    }
}
