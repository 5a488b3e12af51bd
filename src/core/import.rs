use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_records;
use crate::errors::{AppError, AppResult};
use crate::models::entry_source::EntrySource;
use crate::models::training_log::{TrainingLogEntry, TrainingLogRecord};
use crate::ui::messages::{success, warning};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted JSON shapes: a bare array of entries, or a person document
/// carrying them under `trainingLogs`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportDocument {
    Entries(Vec<TrainingLogEntry>),
    Person {
        #[serde(rename = "trainingLogs")]
        training_logs: Vec<TrainingLogEntry>,
    },
}

impl ImportDocument {
    fn into_entries(self) -> Vec<TrainingLogEntry> {
        match self {
            ImportDocument::Entries(e) => e,
            ImportDocument::Person { training_logs } => training_logs,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Stored, but ignored by duty calculations (bad date or duration).
    pub not_counted: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn parse(content: &str) -> AppResult<Vec<TrainingLogEntry>> {
        let doc: ImportDocument = serde_json::from_str(content)?;
        Ok(doc.into_entries())
    }

    /// Append every entry of the JSON file at `path` as-is.
    pub fn import_file(pool: &mut DbPool, person: &str, path: &Path) -> AppResult<ImportReport> {
        let person = person.trim();
        if person.is_empty() {
            return Err(AppError::Other("person name must not be empty".into()));
        }

        let content = fs::read_to_string(path)?;
        let entries = Self::parse(&content)?;

        let not_counted = entries
            .iter()
            .filter(|e| e.instant().is_none() || e.countable_hours().is_none())
            .count();

        let records: Vec<TrainingLogRecord> = entries
            .into_iter()
            .map(|e| TrainingLogRecord::new(person, e, EntrySource::Import))
            .collect();

        let imported = insert_records(pool, &records)?;

        let msg = format!(
            "Imported {} entries for {} from {}",
            imported,
            person,
            path.display()
        );
        ttlog_quiet(&pool.conn, "import", person, &msg);
        success(msg);

        if not_counted > 0 {
            warning(format!(
                "{} entries have a missing/invalid date or duration and will not count toward duty limits",
                not_counted
            ));
        }

        Ok(ImportReport {
            imported,
            not_counted,
        })
    }
}
