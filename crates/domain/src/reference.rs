// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data consumed by the formatters.
//!
//! Reference data is built once at process start (either the built-in
//! tables or a JSON override) and shared immutably afterwards.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic anchor for a country on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Two-letter country code.
    pub code: String,
}

impl GeoPoint {
    /// Code used for countries missing from the coordinate table.
    pub const UNKNOWN_CODE: &'static str = "XX";

    /// Sentinel used for countries missing from the coordinate table.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            lat: 0.0,
            lng: 0.0,
            code: String::from(Self::UNKNOWN_CODE),
        }
    }
}

const DEFAULT_HOME_COUNTRY: &str = "Haiti";
const DEFAULT_UNKNOWN_COUNTRY_LABEL: &str = "Unknown";
const DEFAULT_UNSPECIFIED_REGION_LABEL: &str = "Non Espesifye";
const DEFAULT_NO_DATA_MESSAGE: &str = "Pa gen vòt Ayiti ankò";

const DEFAULT_DEPARTMENTS: [&str; 10] = [
    "Artibonite",
    "Centre",
    "Grand'Anse",
    "Nippes",
    "Nord",
    "Nord-Est",
    "Nord-Ouest",
    "Ouest",
    "Sud",
    "Sud-Est",
];

const DEFAULT_COUNTRIES: [(&str, f64, f64, &str); 9] = [
    ("Haiti", 18.9712, -72.2852, "HT"),
    ("United States", 37.0902, -95.7129, "US"),
    ("Canada", 56.1304, -106.3468, "CA"),
    ("France", 46.2276, 2.2137, "FR"),
    ("Dominican Republic", 18.7357, -70.1627, "DO"),
    ("Brazil", -14.2350, -51.9253, "BR"),
    ("Chile", -35.6751, -71.5430, "CL"),
    ("Mexico", 23.6345, -102.5528, "MX"),
    ("Bahamas", 25.0343, -77.3963, "BS"),
];

/// Immutable lookup tables injected into the formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// The country whose departments are broken down.
    #[serde(default = "default_home_country")]
    pub home_country: String,
    /// Official administrative departments of the home country.
    pub departments: Vec<String>,
    /// Map anchors keyed by country name.
    pub countries: BTreeMap<String, GeoPoint>,
    /// Label for votes without a country.
    #[serde(default = "default_unknown_country_label")]
    pub unknown_country_label: String,
    /// Label for home-country votes without a region.
    #[serde(default = "default_unspecified_region_label")]
    pub unspecified_region_label: String,
    /// Message returned when the home country has no votes yet.
    #[serde(default = "default_no_data_message")]
    pub no_data_message: String,
}

fn default_home_country() -> String {
    String::from(DEFAULT_HOME_COUNTRY)
}

fn default_unknown_country_label() -> String {
    String::from(DEFAULT_UNKNOWN_COUNTRY_LABEL)
}

fn default_unspecified_region_label() -> String {
    String::from(DEFAULT_UNSPECIFIED_REGION_LABEL)
}

fn default_no_data_message() -> String {
    String::from(DEFAULT_NO_DATA_MESSAGE)
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            home_country: default_home_country(),
            departments: DEFAULT_DEPARTMENTS.iter().map(ToString::to_string).collect(),
            countries: DEFAULT_COUNTRIES
                .iter()
                .map(|(name, lat, lng, code)| {
                    (
                        (*name).to_string(),
                        GeoPoint {
                            lat: *lat,
                            lng: *lng,
                            code: (*code).to_string(),
                        },
                    )
                })
                .collect(),
            unknown_country_label: default_unknown_country_label(),
            unspecified_region_label: default_unspecified_region_label(),
            no_data_message: default_no_data_message(),
        }
    }
}

impl ReferenceData {
    /// Returns the map anchor for a country, or `GeoPoint::unknown()`.
    #[must_use]
    pub fn coordinates(&self, country: &str) -> GeoPoint {
        self.countries
            .get(country)
            .cloned()
            .unwrap_or_else(GeoPoint::unknown)
    }

    /// Returns whether a name is one of the official departments.
    #[must_use]
    pub fn is_department(&self, name: &str) -> bool {
        self.departments.iter().any(|d| d == name)
    }

    /// Validates the tables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A label or the home country is blank
    /// - A department name is blank or repeated
    /// - A country name is blank
    /// - A coordinate is out of range or a country code is not two ASCII uppercase letters
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("home_country", &self.home_country),
            ("unknown_country_label", &self.unknown_country_label),
            ("unspecified_region_label", &self.unspecified_region_label),
            ("no_data_message", &self.no_data_message),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::BlankReferenceField(field));
            }
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.departments.len());
        for department in &self.departments {
            if department.trim().is_empty() {
                return Err(DomainError::InvalidDepartment(String::from(
                    "Department name cannot be empty",
                )));
            }
            if seen.contains(&department.as_str()) {
                return Err(DomainError::DuplicateDepartment(department.clone()));
            }
            seen.push(department);
        }

        for (country, point) in &self.countries {
            if country.trim().is_empty() {
                return Err(DomainError::InvalidCountry(String::from(
                    "Country name cannot be empty",
                )));
            }
            if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lng) {
                return Err(DomainError::InvalidCoordinates {
                    country: country.clone(),
                    lat: point.lat,
                    lng: point.lng,
                });
            }
            if point.code.len() != 2 || !point.code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(DomainError::InvalidCountryCode {
                    country: country.clone(),
                    code: point.code.clone(),
                });
            }
        }

        Ok(())
    }
}
