//! Configuration management

use crate::error::{Result, ViewVoyageError};
use crate::types::Config;
use crate::utils::paths::{ensure_dir, get_config_dir, get_config_path, get_data_dir};
use std::path::Path;
use tokio::fs;
use tokio::process::Command;

/// Load configuration from file, merging with defaults
pub async fn load_config() -> Result<Config> {
    load_config_from(Path::new(&get_config_path())).await
}

/// Load configuration from an explicit path
pub async fn load_config_from(path: &Path) -> Result<Config> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str::<Config>(&content)
            .map_err(|e| ViewVoyageError::InvalidConfig(format!("{}: {}", path.display(), e)))?
    } else {
        Config::default()
    };

    // Set data_dir with default if empty
    if config.data_dir.is_empty() {
        config.data_dir = get_data_dir();
    }

    if config.storage_prefix.is_empty() {
        return Err(ViewVoyageError::InvalidConfig(
            "storage_prefix must not be empty".into(),
        ));
    }

    Ok(config)
}

/// Save configuration to file
pub async fn save_config(config: &Config) -> Result<()> {
    ensure_dir(&get_config_dir()).await?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(get_config_path(), content).await?;
    Ok(())
}

/// Open config file in editor
pub async fn edit_config(editor: &str) -> Result<()> {
    let config_path = get_config_path();

    // Ensure config file exists
    if !Path::new(&config_path).exists() {
        save_config(&Config::default()).await?;
    }

    Command::new(editor).arg(&config_path).status().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_from(&tmp.path().join("config.json")).await.unwrap();

        assert_eq!(config.storage_prefix, "viewvoyage");
        assert_eq!(config.upload_delay_ms, 1500);
        assert_eq!(config.data_dir, get_data_dir());
    }

    #[tokio::test]
    async fn test_user_values_take_precedence() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"data_dir": "/srv/vv", "recommended_limit": 2}"#)
            .await
            .unwrap();

        let config = load_config_from(&path).await.unwrap();
        assert_eq!(config.data_dir, "/srv/vv");
        assert_eq!(config.recommended_limit, 2);
        assert_eq!(config.editor, "nvim");
    }

    #[tokio::test]
    async fn test_malformed_file_is_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ nope").await.unwrap();

        let err = load_config_from(&path).await.unwrap_err();
        assert!(matches!(err, ViewVoyageError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_empty_prefix_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"storage_prefix": ""}"#).await.unwrap();

        assert!(load_config_from(&path).await.is_err());
    }
}
