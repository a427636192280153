//! Driving-age rules
//!
//! The legal-age table is explicit configuration; [`DrivingRules::standard`]
//! is the pure factory that replaces a module-global map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum driving age per country code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingRules {
    minimum_ages: HashMap<String, u32>,
}

impl DrivingRules {
    /// Create an empty rule set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard rule set (US: 16, UK: 17)
    #[must_use]
    pub fn standard() -> Self {
        let mut minimum_ages = HashMap::new();
        minimum_ages.insert("US".to_string(), 16);
        minimum_ages.insert("UK".to_string(), 17);
        Self { minimum_ages }
    }

    /// Add or replace the rule for a country
    pub fn set_minimum_age(&mut self, country: impl Into<String>, age: u32) {
        self.minimum_ages.insert(country.into(), age);
    }

    /// Minimum driving age for a country, if configured
    #[must_use]
    pub fn minimum_age(&self, country: &str) -> Option<u32> {
        self.minimum_ages.get(country).copied()
    }
}

/// Check whether a driver of `age` may drive in `country`
///
/// # Errors
///
/// Returns [`Error::UnknownCountry`] if the rules carry no entry for
/// `country`.
pub fn can_drive(age: u32, country: &str, rules: &DrivingRules) -> Result<bool> {
    match rules.minimum_age(country) {
        Some(minimum) => Ok(age >= minimum),
        None => Err(Error::UnknownCountry(country.to_string())),
    }
}
