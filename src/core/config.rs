use crate::config::Config;
use crate::config::migrate::{migrate_missing_keys, missing_keys, set_key};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values merged with defaults).
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the file. Returns them.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        let missing = missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing configuration keys: {} (run `config --migrate` to add defaults)",
                missing.join(", ")
            ));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<&'static str>> {
        let added = migrate_missing_keys(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added configuration keys: {}", added.join(", ")));
        }
        Ok(added)
    }

    pub fn set(path: &Path, assignment: &str) -> AppResult<String> {
        let (key, value) = set_key(path, assignment)?;
        let shown = serde_yaml::to_string(&value)?.trim().to_string();
        let msg = format!("{key} = {shown}");
        success(format!("Configuration updated: {msg}"));
        Ok(msg)
    }

    /// Open the config file in `editor`, else $EDITOR/$VISUAL, else nano/notepad.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if matches!(Command::new(&requested).arg(path).status(), Ok(s) if s.success()) {
            success(format!("Configuration file edited using '{requested}'"));
            return Ok(());
        }

        if requested != default_editor {
            warning(format!(
                "Editor '{requested}' not available, falling back to '{default_editor}'"
            ));
            if matches!(Command::new(&default_editor).arg(path).status(), Ok(s) if s.success()) {
                success(format!("Configuration file edited using '{default_editor}'"));
                return Ok(());
            }
        }

        error(format!("Failed to edit {}", path.display()));
        Err(AppError::Config(format!(
            "no usable editor to open {}",
            path.display()
        )))
    }
}
