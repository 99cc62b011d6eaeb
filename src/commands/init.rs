//! Init command handler.

use crate::commands::Out;
use crate::{Config, Result};
use std::path::Path;

/// Creates the outlay home directory and an initial `config.json`.
///
/// The two table files are not created here; a missing table reads as empty and is written on
/// the first add.
///
/// # Errors
///
/// - Returns an error if the directory cannot be created.
/// - Returns an error if a config file already exists in the directory.
pub async fn init(home: &Path) -> Result<Out<String>> {
    let config = Config::create(home).await?;
    let message = format!(
        "Initialized outlay home at '{}'",
        config.root().display()
    );
    Ok(Out::new(message, config.root().display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_home_and_config() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("outlay");

        let out = init(&home).await.unwrap();
        assert!(out.message().contains("Initialized outlay home"));
        assert!(home.join("config.json").is_file());
    }

    #[tokio::test]
    async fn test_init_twice_is_an_error() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("outlay");
        init(&home).await.unwrap();
        assert!(init(&home).await.is_err());
    }
}
