//! Mergington High School activities service.
//!
//! Library root — exposes the directory, config, and HTTP router so the
//! binary and the integration tests share one implementation.

pub mod activities;
pub mod config;
pub mod error;
pub mod logger;
pub mod web;
