use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, or into `<dest_file>.zip` when compressing.
    /// Returns the path actually written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Config(format!(
                "database not found: {}",
                src.display()
            )));
        }
        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "backup path must be absolute: {dest_file}"
            )));
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_parent_dir(&final_path)?;
        ensure_writable(&final_path, force)?;

        if compress {
            compress_backup(src, &final_path)?;
        } else {
            fs::copy(src, &final_path)?;
        }

        success(format!("Backup created: {}", final_path.display()));

        let pool = DbPool::new(&cfg.database)?;
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Write `src` into a zip archive at `zip_path`.
///
/// The database is first copied to a staging file so the archive is built
/// from a stable snapshot; the staging copy is removed afterwards.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let staging = zip_path.with_extension("tmp");
    fs::copy(src, &staging)?;

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rdutylog.sqlite".to_string());

    let result = (|| -> AppResult<()> {
        let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(entry_name, options)?;
        let mut f = fs::File::open(&staging)?;
        std::io::copy(&mut f, &mut zip)?;
        zip.finish()?;
        Ok(())
    })();

    if let Err(e) = fs::remove_file(&staging) {
        warning(format!("Failed to remove staging copy {}: {}", staging.display(), e));
    }
    result?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(())
}
