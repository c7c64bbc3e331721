//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.

use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub service: RawService,
    #[serde(default)]
    pub http: RawHttp,
}

#[derive(Deserialize)]
pub(super) struct RawService {
    #[serde(default = "default_service_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for RawService {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

#[derive(Deserialize)]
pub(super) struct RawHttp {
    #[serde(default = "default_http_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for RawHttp {
    fn default() -> Self {
        Self {
            bind: default_http_bind(),
            static_dir: default_static_dir(),
        }
    }
}

pub(super) fn default_service_name() -> String {
    "mergington-activities".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_http_bind() -> String {
    "127.0.0.1:8000".to_string()
}

pub(super) fn default_static_dir() -> String {
    "static".to_string()
}
