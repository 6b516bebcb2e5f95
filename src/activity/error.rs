use std::path::PathBuf;
use thiserror::Error;

/// Failures the activity reporter knows how to report.
///
/// `MissingData`, `InputNotFound` and `MalformedValue` end up in the output
/// file as an error document. `Io` is anything else the filesystem throws at
/// us and is returned to the caller.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Error: {0}")]
    MissingData(String),

    #[error("No such file or directory: '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("{0}")]
    MalformedValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingData(what.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedValue(message.into())
    }

    /// Whether this failure belongs in the output file rather than with the caller
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedValue(format!("Invalid JSON input: {err}"))
    }
}
