use crate::models::training_log::TrainingLogRecord;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TrainingLogExport {
    pub id: i64,
    pub person: String,
    pub date: String,
    pub flight_duration: f64,
    pub counted: bool,
    pub source: String,
    pub created_at: String,
}

impl From<&TrainingLogRecord> for TrainingLogExport {
    fn from(r: &TrainingLogRecord) -> Self {
        Self {
            id: r.id,
            person: r.person.clone(),
            date: r.date_display().to_string(),
            flight_duration: r.entry.flight_duration,
            counted: r.has_valid_date() && r.entry.countable_hours().is_some(),
            source: r.source.to_db_str().to_string(),
            created_at: r.created_at.clone(),
        }
    }
}
