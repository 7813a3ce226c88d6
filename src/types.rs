//! Type definitions for viewvoyage
//!
//! Source of truth for all data structures. Field names on the wire follow the
//! persisted JSON layout (`thumbnailUrl`, `views`, `user`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Identity Types
// ============================================

/// A user of the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// The identity every successful sign in is bound to
    pub fn demo() -> Self {
        Self {
            id: "user1".into(),
            username: "demo_user".into(),
            avatar: Some("https://i.pravatar.cc/150?img=68".into()),
        }
    }

    /// Owner of uploads made while signed out
    pub fn guest() -> Self {
        Self {
            id: "guest".into(),
            username: "guest".into(),
            avatar: Some("https://i.pravatar.cc/150?img=0".into()),
        }
    }

    /// Two-letter badge shown in place of an avatar image
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect::<String>().to_uppercase()
    }
}

// ============================================
// Catalog Types
// ============================================

/// A comment on a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(rename = "user")]
    pub author: User,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "likes")]
    pub like_count: u64,
}

/// A video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub upload_date: DateTime<Utc>,
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
    #[serde(rename = "views")]
    pub view_count: u64,
    #[serde(rename = "likes")]
    pub like_count: u64,
    #[serde(rename = "user")]
    pub owner: User,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Video {
    /// Case-insensitive substring match against title or description.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Data for a new video; the catalog assigns id, comments, likes and views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub upload_date: DateTime<Utc>,
    pub duration_seconds: u64,
    pub owner: User,
}

// ============================================
// Config Types
// ============================================

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for every storage key (default: "viewvoyage")
    pub storage_prefix: String,
    /// Directory holding persisted state, empty means the XDG data dir
    pub data_dir: String,
    /// Simulated upload delay in milliseconds (default: 1500)
    pub upload_delay_ms: u64,
    /// How many videos the detail view recommends (default: 4)
    pub recommended_limit: usize,
    /// Thumbnail used when an upload has none
    pub default_thumbnail_url: String,
    /// Editor command (default: "nvim")
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_prefix: "viewvoyage".into(),
            data_dir: String::new(), // Set at runtime to the XDG data dir
            upload_delay_ms: 1500,
            recommended_limit: 4,
            default_thumbnail_url: "https://images.unsplash.com/photo-1535016120720-40c646be5580?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3".into(),
            editor: "nvim".into(),
        }
    }
}

// ============================================
// Upload Types
// ============================================

/// What the user picked in the upload form
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub title: String,
    pub description: String,
    pub video_path: Option<std::path::PathBuf>,
    pub thumbnail_path: Option<std::path::PathBuf>,
}

/// Options for the simulated upload
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Pause before the upload resolves
    pub delay: std::time::Duration,
    /// Thumbnail used when the request has none
    pub default_thumbnail_url: String,
    /// Show a spinner while waiting
    pub show_progress: bool,
}

impl From<&Config> for UploadOptions {
    fn from(config: &Config) -> Self {
        Self {
            delay: std::time::Duration::from_millis(config.upload_delay_ms),
            default_thumbnail_url: config.default_thumbnail_url.clone(),
            show_progress: true,
        }
    }
}

// ============================================
// Selector Types
// ============================================

/// Item displayed in the picker
#[derive(Debug, Clone)]
pub struct MenuItem<T> {
    /// Display text
    pub label: String,
    /// Underlying value
    pub value: T,
}
