// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required reference field is blank.
    BlankReferenceField(&'static str),
    /// Department name is empty or invalid.
    InvalidDepartment(String),
    /// A department appears more than once.
    DuplicateDepartment(String),
    /// Country name is empty or invalid.
    InvalidCountry(String),
    /// Country coordinates are out of range.
    InvalidCoordinates {
        /// The country the coordinates belong to.
        country: String,
        /// The latitude.
        lat: f64,
        /// The longitude.
        lng: f64,
    },
    /// Country code is not two uppercase ASCII letters.
    InvalidCountryCode {
        /// The country the code belongs to.
        country: String,
        /// The invalid code.
        code: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankReferenceField(field) => {
                write!(f, "Reference field '{field}' cannot be blank")
            }
            Self::InvalidDepartment(msg) => write!(f, "Invalid department: {msg}"),
            Self::DuplicateDepartment(name) => write!(f, "Duplicate department: {name}"),
            Self::InvalidCountry(msg) => write!(f, "Invalid country: {msg}"),
            Self::InvalidCoordinates { country, lat, lng } => {
                write!(f, "Invalid coordinates for {country}: ({lat}, {lng})")
            }
            Self::InvalidCountryCode { country, code } => {
                write!(f, "Invalid country code for {country}: '{code}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
