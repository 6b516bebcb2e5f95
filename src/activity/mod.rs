//! User activity report
//!
//! Reads a JSON object of user records and writes a report with two parts:
//!
//! - the share of each email host among users with a well-formed address
//! - the share of logins falling into each recency bucket
//!
//! ```json
//! {
//!     "gmail.com": "75.0 %",
//!     "yandex.ru": "25.0 %",
//!     "two_days_online": "20.0 %",
//!     "one_week_online": "20.0 %",
//!     "one_month_online": "0.0 %",
//!     "half_year_online": "20.0 %",
//!     "more_half_year_online": "20.0 %"
//! }
//! ```
//!
//! When a user lacks an email or a login date, the input file is missing,
//! or a value cannot be parsed, the output holds a single `error` key
//! instead.
//!
//! # Examples
//!
//! ```rust,no_run
//! use roster::activity::process_data;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), roster::activity::ReportError> {
//! let outcome = process_data(
//!     Path::new("users.json"),
//!     Path::new("out/report.json"),
//!     Some("2024-03-01"),
//! )?;
//! assert!(outcome.is_written());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hosts;
pub mod logins;
pub mod report;
pub mod types;

pub use error::ReportError;
pub use hosts::{extract_hosts, host_percentages};
pub use logins::{login_dates, online_percentages, resolve_reference_date};
pub use report::{build_report, process_data, read_users, ReportOutcome};
pub use types::{OnlineBucket, UserRecord, Users};
