//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::model::{Amount, Project};
use crate::registry::ProjectRegistry;
use crate::Config;
use std::str::FromStr;
use tempfile::TempDir;

/// Test environment that sets up an outlay home directory with a Config.
/// Holds TempDir to keep the directory alive for the duration of the test.
pub struct TestEnv {
    _temp_dir: TempDir,
    config: Config,
}

impl TestEnv {
    /// Creates a test environment with an initialized outlay home.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("outlay");
        let config = Config::create(&root).await.unwrap();

        Self {
            _temp_dir: temp_dir,
            config,
        }
    }

    /// Returns a clone of the Config.
    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// Registers a project directly through the registry.
    pub async fn add_project(&self, name: &str, code: &str, contract: &str) {
        let registry = ProjectRegistry::new(&self.config);
        registry
            .add(Project::new(name, code, Amount::from_str(contract).unwrap()))
            .await
            .unwrap();
    }
}
