//! Path utilities for viewvoyage
//!
//! Respects XDG Base Directory Specification

use crate::error::Result;
use std::env;
use std::path::Path;
use tokio::fs;

const APP_NAME: &str = "viewvoyage";

/// Get config directory path
/// Respects XDG_CONFIG_HOME, defaults to ~/.config/viewvoyage
pub fn get_config_dir() -> String {
    let base = env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        dirs::config_dir()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("{}/.config", env::var("HOME").unwrap_or_default()))
    });

    format!("{}/{}", base, APP_NAME)
}

/// Get data directory path
/// Respects XDG_DATA_HOME, defaults to ~/.local/share/viewvoyage
pub fn get_data_dir() -> String {
    let base = env::var("XDG_DATA_HOME").unwrap_or_else(|_| {
        dirs::data_dir()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("{}/.local/share", env::var("HOME").unwrap_or_default()))
    });

    format!("{}/{}", base, APP_NAME)
}

/// Get config file path
pub fn get_config_path() -> String {
    format!("{}/config.json", get_config_dir())
}

/// Turn a local file into the URL stored on an uploaded video
pub fn file_url(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.to_string_lossy())
}

/// Ensure a directory exists
pub async fn ensure_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Ensure all required app directories exist
pub async fn ensure_app_dirs(data_dir: &str) -> Result<()> {
    ensure_dir(&get_config_dir()).await?;
    ensure_dir(data_dir).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_end_with_app_name() {
        assert!(get_config_dir().ends_with("/viewvoyage"));
        assert!(get_data_dir().ends_with("/viewvoyage"));
        assert!(get_config_path().ends_with("/viewvoyage/config.json"));
    }

    #[test]
    fn test_file_url_is_absolute() {
        let url = file_url(Path::new("clip.mp4"));
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("/clip.mp4"));
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested.to_string_lossy()).await.unwrap();
        assert!(nested.is_dir());
    }
}
