//! Configuration loading with env-var overrides.
//!
//! Reads TOML files, supports `[meta] base = "..."` inheritance chains,
//! and applies `MERGINGTON_BIND` and `MERGINGTON_LOG_LEVEL` env overrides.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

use super::raw::{RawConfig, RawHttp, RawService};
use super::types::*;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Deep-merge two TOML values.
/// Tables are merged recursively; the overlay only needs to specify keys that
/// differ from the base. Any other overlay value replaces the base wholesale.
fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_tbl), toml::Value::Table(overlay_tbl)) => {
            for (key, ov_val) in overlay_tbl {
                let merged = match base_tbl.remove(&key) {
                    Some(base_val) => merge_toml(base_val, ov_val),
                    None => ov_val,
                };
                base_tbl.insert(key, merged);
            }
            toml::Value::Table(base_tbl)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file, follow any `[meta] base = "..."` chain, and return the
/// merged `toml::Value`. `visited` holds canonical paths already seen in this
/// chain so cycles are reported instead of recursing forever.
fn load_raw_merged(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<toml::Value, AppError> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical) {
        return Err(AppError::Config(format!(
            "circular base reference detected at: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let overlay_val: toml::Value = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let base_ref = overlay_val
        .get("meta")
        .and_then(|m| m.get("base"))
        .and_then(|b| b.as_str());

    match base_ref {
        Some(base_str) => {
            let base_path = if Path::new(base_str).is_absolute() {
                PathBuf::from(base_str)
            } else {
                path.parent().unwrap_or(Path::new(".")).join(base_str)
            };
            let base_val = load_raw_merged(&base_path, visited)?;
            Ok(merge_toml(base_val, overlay_val))
        }
        None => Ok(overlay_val),
    }
}

/// Load config from the given path, or `config/default.toml`, then apply
/// env-var overrides. Without an explicit path and without the default file,
/// the built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let bind_override = env::var("MERGINGTON_BIND").ok();
    let log_level_override = env::var("MERGINGTON_LOG_LEVEL").ok();

    let path = match config_path {
        Some(p) => Path::new(p),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Path::new(DEFAULT_CONFIG_PATH),
        None => {
            return Ok(resolve(
                RawConfig {
                    service: RawService::default(),
                    http: RawHttp::default(),
                },
                bind_override.as_deref(),
                log_level_override.as_deref(),
            ));
        }
    };

    load_from(path, bind_override.as_deref(), log_level_override.as_deref())
}

/// Load from an explicit path with optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let merged_val = load_raw_merged(path, &mut HashSet::new())?;

    let parsed: RawConfig = Deserialize::deserialize(merged_val).map_err(|e: toml::de::Error| {
        AppError::Config(format!("config error in {}: {e}", path.display()))
    })?;

    Ok(resolve(parsed, bind_override, log_level_override))
}

fn resolve(
    parsed: RawConfig,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Config {
    let RawConfig { service, http } = parsed;

    Config {
        service_name: service.name,
        log_level: log_level_override
            .map(str::to_string)
            .unwrap_or(service.log_level),
        log_file: service
            .log_file
            .filter(|f| !f.trim().is_empty())
            .map(|f| expand_home(&f)),
        http: HttpConfig {
            bind: bind_override.map(str::to_string).unwrap_or(http.bind),
            static_dir: expand_home(&http.static_dir),
        },
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
