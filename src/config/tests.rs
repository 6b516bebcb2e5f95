use super::*;
use std::collections::HashMap;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_parse_full_settings() {
    let settings = Settings::from_toml(
        r#"
[salary]
min_salary = 1500.0

[report]
reference_date = "2024-03-10"
"#,
    )
    .unwrap();

    assert_eq!(settings.salary.min_salary, Some(1500.0));
    assert_eq!(settings.report.reference_date.as_deref(), Some("2024-03-10"));
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
}

#[test]
fn test_unknown_keys_rejected() {
    let err = Settings::from_toml("[salary]\nmax_salary = 3\n").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_load_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings::load(None, temp_dir.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_from_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[salary]\nmin_salary = 10\n",
    )
    .unwrap();

    let settings = Settings::load(None, temp_dir.path()).unwrap();

    assert_eq!(settings.salary.min_salary, Some(10.0));
}

#[test]
fn test_load_explicit_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("other.toml");

    let err = Settings::load(Some(&missing), temp_dir.path()).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_env_overrides_file() {
    let mut settings = Settings::from_toml("[salary]\nmin_salary = 10\n").unwrap();

    settings
        .merge_env_with(env(&[
            (ENV_MIN_SALARY, "250"),
            (ENV_REFERENCE_DATE, "2023-12-31"),
        ]))
        .unwrap();

    assert_eq!(settings.salary.min_salary, Some(250.0));
    assert_eq!(settings.report.reference_date.as_deref(), Some("2023-12-31"));
}

#[test]
fn test_env_min_salary_must_be_numeric() {
    let mut settings = Settings::default();

    let err = settings
        .merge_env_with(env(&[(ENV_MIN_SALARY, "plenty")]))
        .unwrap_err();

    assert!(err.to_string().contains(ENV_MIN_SALARY));
}
