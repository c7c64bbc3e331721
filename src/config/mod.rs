//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the file given with `-f`), then applies `MERGINGTON_BIND` and
//! `MERGINGTON_LOG_LEVEL` env overrides.
//!
//! # Module layout
//!
//! - **types** — resolved structs consumed by the service (`Config`,
//!   `HttpConfig`).
//! - **raw** — TOML deserialization types with serde defaults; kept private.
//! - **load** — `merge_toml`, `load_raw_merged`, `load`, `load_from`,
//!   `expand_home`.

mod load;
mod raw;
mod types;

pub use load::{expand_home, load, load_from};
pub use types::*;
