//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

use crate::error::Error;

/// Exit code for failures that are the user's input rather than ours
pub const ARGUMENT_ERROR: i32 = 2;
pub const GENERAL_ERROR: i32 = 1;

/// Pick the process exit code for `error`.
///
/// Configuration problems and unreadable department files count as argument
/// errors; everything else is general.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Config(_)) | Some(Error::Toml(_)) | Some(Error::Salary(_)) => ARGUMENT_ERROR,
        Some(_) => GENERAL_ERROR,
        None if error.downcast_ref::<crate::salary::SalaryError>().is_some() => ARGUMENT_ERROR,
        None => GENERAL_ERROR,
    }
}

/// Handle fatal errors and exit with appropriate status code
///
/// # Verbose Mode Behavior
/// - `verbose = 0`: the top-level message only
/// - `verbose >= 1`: the full error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    eprintln!("Error: {error}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code_for(&error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::SalaryError;

    #[test]
    fn test_config_errors_are_argument_errors() {
        let err = anyhow::Error::new(Error::Config("bad".into()));
        assert_eq!(exit_code_for(&err), ARGUMENT_ERROR);
    }

    #[test]
    fn test_salary_errors_are_argument_errors() {
        let err = anyhow::Error::new(SalaryError::NotAnObject {
            department: "A".into(),
        });
        assert_eq!(exit_code_for(&err), ARGUMENT_ERROR);
    }

    #[test]
    fn test_other_errors_are_general() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(exit_code_for(&anyhow::Error::new(Error::Io(io))), GENERAL_ERROR);
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), GENERAL_ERROR);
    }
}
