use crate::db::pool::DbPool;
use crate::db::queries::{load_all_records, load_records_for_person};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::{ExportFormat, TrainingLogExport, export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn rows(pool: &DbPool, person: Option<&str>) -> AppResult<Vec<TrainingLogExport>> {
        let records = match person {
            Some(p) => load_records_for_person(pool, p.trim())?,
            None => load_all_records(pool)?,
        };
        Ok(records.iter().map(TrainingLogExport::from).collect())
    }

    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        person: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output path must be absolute: {file}"
            )));
        }

        let rows = Self::rows(pool, person)?;
        if rows.is_empty() {
            warning("No training log entries to export.");
            return Ok(0);
        }

        ensure_parent_dir(path)?;
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
