//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs the service consumes.
//! Raw TOML deserialization types live in `raw.rs`.

use std::path::PathBuf;

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Socket address to bind the listener to.
    pub bind: String,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

/// Fully-resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub log_level: String,
    /// Append logs here instead of stderr when set.
    pub log_file: Option<PathBuf>,
    pub http: HttpConfig,
}
