//! Department salary ranking
//!
//! Averages each department's salaries and picks the three cheapest and the
//! three most expensive departments.
//!
//! # Examples
//!
//! ```rust
//! use roster::salary::rank_departments;
//!
//! let departments = vec![
//!     ("A", vec![("x", 10.0)]),
//!     ("B", vec![("y", 20.0)]),
//!     ("C", vec![("z", 5.0)]),
//!     ("D", vec![]),
//! ];
//!
//! let ranking = rank_departments(departments, None);
//! assert_eq!(ranking.lowest, vec!["C", "A", "B"]);
//! assert_eq!(ranking.highest, vec!["B", "A", "C"]);
//! ```

pub mod loader;
pub mod ranker;

pub use loader::{load_departments, parse_departments, Department};
pub use ranker::{department_averages, rank_departments, DepartmentAverage, DepartmentRanking};

use thiserror::Error;

/// Errors raised while reading a departments file.
///
/// Ranking itself never fails; these only cover turning JSON into
/// department records.
#[derive(Error, Debug)]
pub enum SalaryError {
    #[error("Failed to read departments file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid departments JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Department '{department}' must map employee names to salaries")]
    NotAnObject { department: String },

    #[error("Salary of '{employee}' in department '{department}' is not a number")]
    NotANumber {
        department: String,
        employee: String,
    },
}
