//! Loading department salary tables from JSON

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::SalaryError;

/// One department and its employees' salaries, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub name: String,
    pub employees: Vec<(String, f64)>,
}

impl Department {
    pub fn new(name: impl Into<String>, employees: Vec<(String, f64)>) -> Self {
        Self {
            name: name.into(),
            employees,
        }
    }
}

impl From<Department> for (String, Vec<(String, f64)>) {
    fn from(department: Department) -> Self {
        (department.name, department.employees)
    }
}

/// Parse `{"dept": {"employee": salary, ...}, ...}` keeping key order.
pub fn parse_departments(json: &str) -> Result<Vec<Department>, SalaryError> {
    let root: Map<String, Value> = serde_json::from_str(json)?;

    root.into_iter()
        .map(|(name, employees)| {
            let Value::Object(employees) = employees else {
                return Err(SalaryError::NotAnObject { department: name });
            };

            let employees = employees
                .into_iter()
                .map(|(employee, salary)| match salary.as_f64() {
                    Some(salary) => Ok((employee, salary)),
                    None => Err(SalaryError::NotANumber {
                        department: name.clone(),
                        employee,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Department::new(name, employees))
        })
        .collect()
}

/// Read and parse a departments file.
pub fn load_departments(path: &Path) -> Result<Vec<Department>, SalaryError> {
    let contents = fs::read_to_string(path).map_err(|source| SalaryError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let departments = parse_departments(&contents)?;
    debug!(
        "Loaded {} departments from {}",
        departments.len(),
        path.display()
    );
    Ok(departments)
}
