//! Login recency buckets

use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::types::{format_percentage, OnlineBucket, UserRecord};
use super::ReportError;

/// Collect every user's `last_login` string. Every user must have one.
pub fn login_dates(users: &[(String, UserRecord)]) -> Result<Vec<String>, ReportError> {
    users
        .iter()
        .map(|(id, user)| match user.last_login.as_deref() {
            Some(date) => Ok(date.to_string()),
            None => {
                debug!("User {} has no last_login", id);
                Err(ReportError::missing("No last_logins"))
            }
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` date.
///
/// The shape is checked before chrono sees the value: chrono alone accepts
/// single-digit fields, a sign and leading whitespace.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ReportError> {
    let invalid = || ReportError::malformed(format!("Invalid isoformat string: '{value}'"));

    if !is_iso_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// The date logins are measured against: `fixed` when given, today otherwise.
pub fn resolve_reference_date(fixed: Option<&str>) -> Result<NaiveDate, ReportError> {
    match fixed {
        Some(date) => parse_iso_date(date),
        None => Ok(Local::now().date_naive()),
    }
}

/// Count logins per bucket, in bucket order.
pub fn bucket_counts(
    logins: &[String],
    reference: NaiveDate,
) -> Result<Vec<(OnlineBucket, usize)>, ReportError> {
    let mut counts: Vec<(OnlineBucket, usize)> =
        OnlineBucket::ALL.iter().map(|bucket| (*bucket, 0)).collect();

    for login in logins {
        let date = parse_iso_date(login)?;
        let days = reference.signed_duration_since(date).num_days();

        if let Some(bucket) = OnlineBucket::for_days(days) {
            trace!("Login {} is {} days old, bucket {}", login, days, bucket);
            if let Some(slot) = counts.iter_mut().find(|(b, _)| *b == bucket) {
                slot.1 += 1;
            }
        }
    }

    Ok(counts)
}

/// Percentage per online bucket.
///
/// Each count is divided by the number of buckets rather than by the number
/// of logins, so the values do not generally sum to 100.
pub fn online_percentages(
    logins: &[String],
    reference: Option<&str>,
) -> Result<Map<String, Value>, ReportError> {
    let reference = resolve_reference_date(reference)?;
    debug!(
        "Bucketing {} logins against reference date {}",
        logins.len(),
        reference
    );

    let counts = bucket_counts(logins, reference)?;
    let denominator = counts.len().max(1) as f64;

    Ok(counts
        .into_iter()
        .map(|(bucket, count)| {
            let percentage = count as f64 / denominator * 100.0;
            (
                bucket.label().to_string(),
                Value::String(format_percentage(percentage)),
            )
        })
        .collect())
}
