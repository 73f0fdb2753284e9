//! Horoscope record as delivered by the generation service.
//!
//! The record is read-only input. Trait values are parsed leniently: a
//! missing, `null` or non-numeric score deserializes to `None` and is later
//! normalized to the floor value instead of rejecting the whole record.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HoroscopeError, HoroscopeResult};
use crate::traits::NormalizedTraits;

/// A generated coding horoscope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horoscope {
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
    /// Free-text horoscope message
    pub message: String,
    /// Raw trait scores
    #[serde(default)]
    pub traits: TraitScores,
}

/// Raw trait scores exactly as received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    #[serde(default, deserialize_with = "lenient_score")]
    pub energy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub charisma: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub creativity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub collaboration: Option<f64>,
}

impl TraitScores {
    /// Build scores from four present values.
    pub fn new(energy: f64, charisma: f64, creativity: f64, collaboration: f64) -> Self {
        Self {
            energy: Some(energy),
            charisma: Some(charisma),
            creativity: Some(creativity),
            collaboration: Some(collaboration),
        }
    }
}

/// Accepts numbers and numeric strings; anything else becomes `None`.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

impl Horoscope {
    pub fn new(date: impl Into<String>, message: impl Into<String>, traits: TraitScores) -> Self {
        Self {
            date: date.into(),
            message: message.into(),
            traits,
        }
    }

    /// Parse a horoscope from a JSON string.
    pub fn from_json_str(json: &str) -> HoroscopeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a horoscope from any reader (files, stdin).
    pub fn from_reader<R: Read>(reader: R) -> HoroscopeResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a horoscope from a JSON file.
    pub fn load(path: &Path) -> HoroscopeResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Built-in horoscope used when no record is supplied.
    pub fn sample(date: NaiveDate) -> Self {
        Self::new(
            date.format("%Y-%m-%d").to_string(),
            "Mercury is aligned with your main branch today. Merge conflicts will \
             resolve themselves with surprising grace. A forgotten TODO may hold the \
             key to your next breakthrough. Reach out to a teammate before lunch.",
            TraitScores::new(8.0, 6.0, 9.0, 7.0),
        )
    }

    /// Parse the `date` field into a calendar date.
    pub fn parse_date(&self) -> HoroscopeResult<NaiveDate> {
        let raw = self.date.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
            return Ok(datetime.date_naive());
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(datetime.date());
        }

        Err(HoroscopeError::InvalidDate(raw.to_string()))
    }

    /// Date in long form, e.g. "March 5, 2025".
    ///
    /// Falls back to the raw `date` string when it cannot be parsed.
    pub fn formatted_date(&self) -> String {
        match self.parse_date() {
            Ok(date) => format_long_date(date),
            Err(e) => {
                tracing::warn!("Using raw horoscope date: {}", e);
                self.date.clone()
            }
        }
    }

    /// Trait scores clamped into the displayable range.
    pub fn normalized_traits(&self) -> NormalizedTraits {
        NormalizedTraits::from_scores(&self.traits)
    }
}

/// Format a date as "Month D, YYYY".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
