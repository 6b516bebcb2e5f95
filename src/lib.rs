//! # Roster
//!
//! Two small aggregation tools over employee and user data.
//!
//! ## Usage
//!
//! ```bash
//! roster rank departments.json [--min-salary 1500] [--json]
//! roster report users.json out/report.json [--reference-date 2024-03-10]
//! ```
//!
//! ## Modules
//!
//! - `activity` - Email host and login recency report written as JSON
//! - `app` - Logging setup, process configuration and fatal error handling
//! - `config` - `roster.toml` settings with environment overrides
//! - `error` - Crate-wide error type
//! - `salary` - Department average-salary ranking
pub mod activity;
pub mod app;
pub mod config;
pub mod error;
pub mod salary;

#[cfg(test)]
mod property_tests;

pub use error::{Error, Result};
