//! Configuration file handling for outlay.
//!
//! The configuration file is stored at `$OUTLAY_HOME/config.json`. The two CSV tables live in the
//! same directory by default, but their paths can be overridden in the config file.

use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "outlay";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const PROJECTS_CSV: &str = "projects.csv";
const EXPENSES_CSV: &str = "expenses.csv";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$OUTLAY_HOME` and from there it loads `$OUTLAY_HOME/config.json`. It provides the
/// paths to the two table files, which are either configured or expected in their default
/// locations within the outlay home directory.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the data directory and an initial `config.json` with default settings.
    ///
    /// # Arguments
    /// - `dir` - The directory that will be the root of the data directory, e.g. `$HOME/outlay`
    ///
    /// # Errors
    /// - Returns an error if any file operations fail.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the outlay home directory")?;

        let root = tokio::fs::canonicalize(&maybe_relative)
            .await
            .with_context(|| format!("Unable to canonicalize {}", maybe_relative.display()))?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.is_file() {
            bail!(
                "A config file already exists at '{}'",
                config_path.display()
            )
        }
        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// This will
    /// - validate that the outlay home exists and that the config file exists
    /// - load the config file
    /// - return the loaded configuration object
    ///
    /// The table files themselves are not required to exist; a missing table reads as empty.
    pub async fn load(outlay_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = outlay_home.into();
        let root = tokio::fs::canonicalize(&maybe_relative)
            .await
            .with_context(|| {
                format!(
                    "Outlay home is missing at '{}', run 'outlay init' first",
                    maybe_relative.display()
                )
            })?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!(
                "The config file is missing at '{}', run 'outlay init' first",
                config_path.display()
            )
        }
        let config_file = ConfigFile::load(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the stored projects table path if it is absolute, otherwise resolves it against
    /// the home directory.
    pub fn projects_path(&self) -> PathBuf {
        self.resolve(self.config_file.projects_file())
    }

    /// Returns the stored expenses table path if it is absolute, otherwise resolves it against
    /// the home directory.
    pub fn expenses_path(&self) -> PathBuf {
        self.resolve(self.config_file.expenses_file())
    }

    /// Checks if `p` is relative, and if so, resolves it. Returns it unchanged if it is absolute.
    fn resolve(&self, p: PathBuf) -> PathBuf {
        if p.is_absolute() {
            return p;
        }
        self.root.join(p)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "outlay",
///   "config_version": 1,
///   "projects_file": "projects.csv",
///   "expenses_file": "expenses.csv"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "outlay"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Path to the projects table (optional, relative to the home directory or absolute).
    /// Defaults to $OUTLAY_HOME/projects.csv if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    projects_file: Option<PathBuf>,

    /// Path to the expenses table (optional, relative to the home directory or absolute).
    /// Defaults to $OUTLAY_HOME/expenses.csv if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    expenses_file: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            projects_file: None,
            expenses_file: None,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }

    /// Gets the projects table path, defaulting to `projects.csv` in the home directory.
    pub fn projects_file(&self) -> PathBuf {
        self.projects_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(PROJECTS_CSV))
    }

    /// Gets the expenses table path, defaulting to `expenses.csv` in the home directory.
    pub fn expenses_file(&self) -> PathBuf {
        self.expenses_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPENSES_CSV))
    }
}
