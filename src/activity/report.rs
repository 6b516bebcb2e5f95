//! Reading users, building the merged report and writing it out

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use super::hosts::{extract_hosts, host_percentages};
use super::logins::{login_dates, online_percentages};
use super::types::{parse_users, UserRecord, Users};
use super::ReportError;

/// Outcome of [`process_data`].
#[derive(Debug)]
pub enum ReportOutcome {
    /// The percentage report was written.
    Written(Map<String, Value>),
    /// An error document was written in place of the report.
    Failed(ReportError),
}

impl ReportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ReportOutcome::Written(_))
    }
}

/// Load the users of an input file.
pub fn read_users(input: &Path) -> Result<Users, ReportError> {
    let contents = fs::read_to_string(input).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReportError::InputNotFound(input.to_path_buf()),
        io::ErrorKind::InvalidData => {
            ReportError::malformed(format!("Invalid input encoding: {err}"))
        }
        _ => ReportError::Io(err),
    })?;

    let users = parse_users(&contents)?;
    debug!("Read {} users from {}", users.len(), input.display());
    Ok(users)
}

/// Host and online percentages merged into one object.
///
/// Emails are checked for every user before any `last_login` is.
pub fn build_report(
    users: &[(String, UserRecord)],
    reference_date: Option<&str>,
) -> Result<Map<String, Value>, ReportError> {
    let hosts = extract_hosts(users)?;
    let mut report = host_percentages(&hosts);

    let logins = login_dates(users)?;
    report.extend(online_percentages(&logins, reference_date)?);

    Ok(report)
}

/// Serialize `value` with four-space indentation.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_json<T: Serialize>(output: &Path, value: &T) -> Result<(), ReportError> {
    let bytes = to_json_pretty(value).map_err(io::Error::from)?;
    let mut file = fs::File::create(output)?;
    file.write_all(&bytes)?;
    Ok(())
}

fn generate(
    input: &Path,
    output: &Path,
    reference_date: Option<&str>,
) -> Result<Map<String, Value>, ReportError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let users = read_users(input)?;
    let report = build_report(&users, reference_date)?;
    write_json(output, &report)?;
    Ok(report)
}

/// Produce the activity report for `input` at `output`.
///
/// Missing emails or logins, a missing input file and malformed values are
/// written to `output` as `{"error": "..."}` and reported as
/// [`ReportOutcome::Failed`]. Only filesystem failures outside that set are
/// returned as `Err`.
pub fn process_data(
    input: &Path,
    output: &Path,
    reference_date: Option<&str>,
) -> Result<ReportOutcome, ReportError> {
    match generate(input, output, reference_date) {
        Ok(report) => {
            info!(
                "Wrote activity report with {} entries to {}",
                report.len(),
                output.display()
            );
            Ok(ReportOutcome::Written(report))
        }
        Err(err) if err.is_reportable() => {
            warn!("Activity report failed: {}", err);
            write_json(output, &json!({ "error": err.to_string() }))?;
            Ok(ReportOutcome::Failed(err))
        }
        Err(err) => Err(err),
    }
}
