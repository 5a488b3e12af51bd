//! Maintenance of the YAML config file: detect keys missing from older
//! files, add them with their defaults, and update a single key in place.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::models::window::WindowBoundary;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a current config file is expected to carry.
pub const EXPECTED_KEYS: [&str; 6] = [
    "database",
    "duty_limit_daily",
    "duty_limit_weekly",
    "duty_limit_monthly",
    "window_boundary",
    "show_bars",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn write_mapping(path: &Path, map: Mapping) -> AppResult<()> {
    let yaml = Value::Mapping(map);

    // Refuse to write anything the loader would reject.
    serde_yaml::from_value::<Config>(yaml.clone())
        .map_err(|e| AppError::Config(format!("resulting configuration is invalid: {e}")))?;

    fs::write(path, serde_yaml::to_string(&yaml)?)?;
    Ok(())
}

/// Keys from [`EXPECTED_KEYS`] absent in the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add every missing key with its default value. Returns the keys added.
pub fn migrate_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in EXPECTED_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    if !added.is_empty() {
        write_mapping(path, map)?;
    }
    Ok(added)
}

/// Parse a user-supplied value for `key` into its YAML form.
///
/// Limits accept a non-negative number, or `none`/`null` to unset them.
fn parse_value(key: &str, raw: &str) -> AppResult<Value> {
    let raw = raw.trim();
    let bad = |why: &str| AppError::Config(format!("invalid value '{raw}' for {key}: {why}"));

    match key {
        "database" => {
            if raw.is_empty() {
                return Err(bad("path is empty"));
            }
            Ok(Value::String(raw.to_string()))
        }
        "duty_limit_daily" | "duty_limit_weekly" | "duty_limit_monthly" => {
            if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("null") {
                return Ok(Value::Null);
            }
            let hours: f64 = raw.parse().map_err(|_| bad("expected hours"))?;
            if !hours.is_finite() || hours < 0.0 {
                return Err(bad("hours must be a non-negative number"));
            }
            Ok(Value::Number(hours.into()))
        }
        "window_boundary" => WindowBoundary::from_code(raw)
            .map(|b| Value::String(b.as_str().to_string()))
            .ok_or_else(|| bad("expected 'inclusive' or 'exclusive'")),
        "show_bars" => raw
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| bad("expected true or false")),
        _ => Err(AppError::Config(format!("unknown configuration key '{key}'"))),
    }
}

/// Apply a `KEY=VALUE` assignment to the config file at `path`.
///
/// A missing file is created from defaults first.
pub fn set_key(path: &Path, assignment: &str) -> AppResult<(String, Value)> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| AppError::Config(format!("expected KEY=VALUE, got '{assignment}'")))?;
    let key = key.trim();
    let value = parse_value(key, raw)?;

    if !path.exists() {
        Config::default().save_to(path)?;
    }

    let mut map = read_mapping(path)?;
    map.insert(Value::String(key.to_string()), value.clone());
    write_mapping(path, map)?;

    Ok((key.to_string(), value))
}
