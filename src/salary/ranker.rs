//! Average-salary ranking of departments

use serde::Serialize;
use tracing::{debug, trace};

/// How many departments each end of the ranking holds.
pub const RANK_SIZE: usize = 3;

/// A department paired with the average of its counted salaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAverage {
    pub department: String,
    pub average: f64,
}

/// The cheapest and most expensive departments.
///
/// `lowest` runs from the lowest average upwards, `highest` from the highest
/// average downwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepartmentRanking {
    pub lowest: Vec<String>,
    pub highest: Vec<String>,
}

impl DepartmentRanking {
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.lowest, self.highest)
    }
}

/// Compute the average salary of every non-empty department, ascending.
///
/// Departments without employees are skipped. When `min_salary` is set (and
/// non-zero) only salaries at or above it are averaged; a department where
/// nothing qualifies averages to 0. Equal averages keep input order.
pub fn department_averages<D, N, E, S>(
    departments: D,
    min_salary: Option<f64>,
) -> Vec<DepartmentAverage>
where
    D: IntoIterator<Item = (N, E)>,
    N: Into<String>,
    E: IntoIterator<Item = (S, f64)>,
{
    let threshold = min_salary.filter(|min| *min != 0.0);

    let mut averages: Vec<DepartmentAverage> = departments
        .into_iter()
        .filter_map(|(name, employees)| {
            let salaries: Vec<f64> = employees.into_iter().map(|(_, salary)| salary).collect();
            if salaries.is_empty() {
                return None;
            }

            let counted: Vec<f64> = match threshold {
                Some(min) => salaries.into_iter().filter(|s| *s >= min).collect(),
                None => salaries,
            };
            // fold from +0.0: an empty float sum is -0.0, which sorts below 0.0
            let total = counted.iter().fold(0.0, |acc, s| acc + s);
            let average = total / counted.len().max(1) as f64;

            let department: String = name.into();
            trace!("Department {} averages {}", department, average);
            Some(DepartmentAverage {
                department,
                average,
            })
        })
        .collect();

    // sort_by is stable, so ties stay in input order
    averages.sort_by(|a, b| a.average.total_cmp(&b.average));
    averages
}

/// Rank departments by average salary.
///
/// Returns the three lowest-paid departments (lowest first) and the three
/// highest-paid departments (highest first). Either list is shorter when fewer
/// than three departments have employees.
pub fn rank_departments<D, N, E, S>(departments: D, min_salary: Option<f64>) -> DepartmentRanking
where
    D: IntoIterator<Item = (N, E)>,
    N: Into<String>,
    E: IntoIterator<Item = (S, f64)>,
{
    let ordered: Vec<String> = department_averages(departments, min_salary)
        .into_iter()
        .map(|entry| entry.department)
        .collect();

    debug!(
        "Ranking {} departments (min salary: {:?})",
        ordered.len(),
        min_salary
    );

    let lowest = ordered.iter().take(RANK_SIZE).cloned().collect();
    let highest = ordered.iter().rev().take(RANK_SIZE).cloned().collect();

    DepartmentRanking { lowest, highest }
}
