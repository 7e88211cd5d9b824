//! Wire format of the remote starship feed and conversion into catalog rows.
//!
//! The feed reports numbers as display strings: `"1,600"`, `"unknown"`, `"n/a"`. Some
//! mirrors serve plain JSON numbers instead, both are accepted.

use serde::Deserialize;

use crate::server::{error::import::ImportError, model::starship::NewStarship};

/// One page of the feed.
#[derive(Debug, Deserialize)]
pub struct StarshipPage {
    pub results: Vec<FeedStarship>,
    /// Absolute URL of the next page, `null` on the last one
    #[serde(default)]
    pub next: Option<String>,
    /// Total number of records the feed reports across all pages
    #[serde(default)]
    pub count: u64,
}

/// A starship record as served by the feed, unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub struct FeedStarship {
    pub starship_class: String,
    pub manufacturer: String,
    pub length: FeedValue,
    pub hyperdrive_rating: FeedValue,
    pub cargo_capacity: FeedValue,
    pub crew: FeedValue,
    pub passengers: FeedValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeedValue {
    Number(serde_json::Number),
    Text(String),
}

impl FeedValue {
    fn invalid(&self, field: &'static str) -> ImportError {
        let value = match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        };

        ImportError::InvalidRecord { field, value }
    }

    /// The cleaned text of a string value, `None` when the feed does not know the value.
    fn text(text: &str) -> Option<String> {
        let text = text.trim();

        if text.eq_ignore_ascii_case("unknown") || text.eq_ignore_ascii_case("n/a") {
            return None;
        }

        Some(text.replace(',', ""))
    }

    pub fn to_f64(&self, field: &'static str) -> Result<f64, ImportError> {
        let value = match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(text) => match Self::text(text) {
                None => return Ok(0.0),
                Some(text) => text.parse::<f64>().ok(),
            },
        };

        match value {
            Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(self.invalid(field)),
        }
    }

    pub fn to_i64(&self, field: &'static str) -> Result<i64, ImportError> {
        let value = match self {
            Self::Number(number) => number.as_i64(),
            Self::Text(text) => match Self::text(text) {
                None => return Ok(0),
                Some(text) => text.parse::<i64>().ok(),
            },
        };

        match value {
            Some(value) if value >= 0 => Ok(value),
            _ => Err(self.invalid(field)),
        }
    }

    pub fn to_i32(&self, field: &'static str) -> Result<i32, ImportError> {
        let value = self.to_i64(field)?;

        i32::try_from(value).map_err(|_| self.invalid(field))
    }
}

impl TryFrom<&FeedStarship> for NewStarship {
    type Error = ImportError;

    fn try_from(record: &FeedStarship) -> Result<Self, Self::Error> {
        Ok(Self {
            starship_class: record.starship_class.clone(),
            manufacturer: record.manufacturer.clone(),
            length: record.length.to_f64("length")?,
            hyperdrive_rating: record.hyperdrive_rating.to_f64("hyperdrive_rating")?,
            cargo_capacity: record.cargo_capacity.to_i64("cargo_capacity")?,
            crew: record.crew.to_i32("crew")?,
            passengers: record.passengers.to_i32("passengers")?,
        })
    }
}
