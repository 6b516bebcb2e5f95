//! Type definitions for the activity report

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ReportError;

/// A single user entry from the input file.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
pub struct UserRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl UserRecord {
    pub fn new(email: Option<&str>, last_login: Option<&str>) -> Self {
        Self {
            email: email.map(str::to_string),
            last_login: last_login.map(str::to_string),
        }
    }
}

/// All users keyed by identifier, in file order.
pub type Users = Vec<(String, UserRecord)>;

/// Parse the top-level `{"user_id": {...}, ...}` object.
pub fn parse_users(json: &str) -> Result<Users, ReportError> {
    let root: Map<String, Value> = serde_json::from_str(json)?;

    root.into_iter()
        .map(|(id, record)| {
            let record: UserRecord = serde_json::from_value(record)?;
            Ok((id, record))
        })
        .collect()
}

/// Recency categories, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnlineBucket {
    TwoDays,
    OneWeek,
    OneMonth,
    HalfYear,
    MoreHalfYear,
}

impl OnlineBucket {
    pub const ALL: [OnlineBucket; 5] = [
        OnlineBucket::TwoDays,
        OnlineBucket::OneWeek,
        OnlineBucket::OneMonth,
        OnlineBucket::HalfYear,
        OnlineBucket::MoreHalfYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OnlineBucket::TwoDays => "two_days_online",
            OnlineBucket::OneWeek => "one_week_online",
            OnlineBucket::OneMonth => "one_month_online",
            OnlineBucket::HalfYear => "half_year_online",
            OnlineBucket::MoreHalfYear => "more_half_year_online",
        }
    }

    /// Largest number of days since last login that still falls in this bucket
    pub fn max_days(self) -> i64 {
        match self {
            OnlineBucket::TwoDays => 2,
            OnlineBucket::OneWeek => 7,
            OnlineBucket::OneMonth => 30,
            OnlineBucket::HalfYear => 182,
            OnlineBucket::MoreHalfYear => 999_999_999,
        }
    }

    /// First bucket whose threshold covers `days`.
    ///
    /// Negative values (logins after the reference date) land in the first
    /// bucket.
    pub fn for_days(days: i64) -> Option<OnlineBucket> {
        Self::ALL
            .into_iter()
            .find(|bucket| days <= bucket.max_days())
    }
}

impl std::fmt::Display for OnlineBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a percentage the way report files show it: `"25.0 %"`.
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
/// signed, two-digit exponent (`9.999999999999999e-05 %`).
pub fn format_percentage(value: f64) -> String {
    format!("{} %", format_float(value))
}

fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{value:e}");
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => scientific,
        };
    }

    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
