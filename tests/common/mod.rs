//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context builder for setting up test environments
pub struct TestContextBuilder {
    temp_dir: TempDir,
    initial_files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    /// Create a new test context builder
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            initial_files: Vec::new(),
        })
    }

    /// Add an initial file
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.initial_files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Build the test context
    pub fn build(self) -> Result<TestContext> {
        for (path, content) in &self.initial_files {
            let full_path = self.temp_dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

/// A temporary working directory holding input fixtures
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(fs::read_to_string(self.join(relative))?)
    }

    pub fn read_json(&self, relative: impl AsRef<Path>) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.read(relative)?)?)
    }
}

pub const DEPARTMENTS: &str = r#"{
    "Accounting": {"Ann": 1200, "Bob": 1800},
    "Marketing": {"Cid": 3000},
    "Warehouse": {"Dan": 900, "Eve": 1100},
    "Research": {"Fay": 5200, "Gus": 4800},
    "Empty": {}
}"#;

pub const USERS: &str = r#"{
    "1": {"email": "ann@gmail.com", "last_login": "2024-03-09"},
    "2": {"email": "bob@gmail.com", "last_login": "2024-03-04"},
    "3": {"email": "cid@yandex.ru", "last_login": "2024-02-20"},
    "4": {"email": "dan@bad@host", "last_login": "2023-01-01"}
}"#;
