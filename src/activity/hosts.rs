//! Email host distribution

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::types::{format_percentage, UserRecord};
use super::ReportError;

/// Collect the host part of every well-formed email address.
///
/// Every user must have an email. Addresses without exactly one `@` are
/// skipped.
pub fn extract_hosts(users: &[(String, UserRecord)]) -> Result<Vec<String>, ReportError> {
    let mut hosts = Vec::with_capacity(users.len());

    for (id, user) in users {
        let Some(email) = user.email.as_deref() else {
            debug!("User {} has no email", id);
            return Err(ReportError::missing("No emails"));
        };

        match email.split_once('@') {
            Some((_, host)) if !host.contains('@') => hosts.push(host.to_string()),
            _ => trace!("Skipping malformed email of user {}: {:?}", id, email),
        }
    }

    Ok(hosts)
}

/// Share of each host among all extracted hosts, in order of first appearance.
pub fn host_percentages(hosts: &[String]) -> Map<String, Value> {
    let total = hosts.len().max(1) as f64;
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for host in hosts {
        match positions.get(host.as_str()) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(host.as_str(), counts.len());
                counts.push((host.as_str(), 1));
            }
        }
    }

    counts
        .into_iter()
        .map(|(host, count)| {
            let percentage = count as f64 / total * 100.0;
            (host.to_string(), Value::String(format_percentage(percentage)))
        })
        .collect()
}
