use super::entry_source::EntrySource;
use crate::utils::date::parse_entry_instant;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One flight as it is kept in a person's training log.
///
/// `date` stays the raw string it was recorded with: imported logs may carry
/// dates that do not parse, and those rows are kept but never counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLogEntry {
    #[serde(default, deserialize_with = "raw_date")]
    pub date: Option<String>,
    #[serde(rename = "flightDuration")]
    pub flight_duration: f64,
}

impl TrainingLogEntry {
    pub fn new(date: impl Into<String>, flight_duration: f64) -> Self {
        Self {
            date: Some(date.into()),
            flight_duration,
        }
    }

    /// Resolved timestamp of the flight, `None` when missing or malformed.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_entry_instant)
    }

    /// Duration usable in a sum: finite and non-negative.
    pub fn countable_hours(&self) -> Option<f64> {
        if self.flight_duration.is_finite() && self.flight_duration >= 0.0 {
            Some(self.flight_duration)
        } else {
            None
        }
    }
}

/// Keep non-string dates (e.g. timestamp objects) as their JSON text so the
/// row is stored as received; such a date never parses and is not counted.
fn raw_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// A persisted training log row (⇔ table `training_logs`).
#[derive(Debug, Clone, Serialize)]
pub struct TrainingLogRecord {
    pub id: i64,
    pub person: String,
    #[serde(flatten)]
    pub entry: TrainingLogEntry,
    pub source: EntrySource,
    pub created_at: String, // ISO8601
}

impl TrainingLogRecord {
    /// Build a not-yet-stored record (id = 0, created_at = now).
    pub fn new(person: &str, entry: TrainingLogEntry, source: EntrySource) -> Self {
        Self {
            id: 0,
            person: person.to_string(),
            entry,
            source,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_display(&self) -> &str {
        self.entry.date.as_deref().unwrap_or("")
    }

    pub fn has_valid_date(&self) -> bool {
        self.entry.instant().is_some()
    }
}
