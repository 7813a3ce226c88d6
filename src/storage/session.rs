//! Session management: current user, liked videos and the watch later list

use super::{KeyValueStore, StorageKeys, load_json, save_json};
use crate::error::Result;
use crate::types::{User, Video};
use serde::de::DeserializeOwned;

/// Session store
///
/// Liked and watch later entries are full copies taken when the video was
/// toggled. They are not refreshed when the catalog changes.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    keys: StorageKeys,
    current_user: Option<User>,
    liked_videos: Vec<Video>,
    my_list_videos: Vec<Video>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an empty session. Call [`SessionStore::init`] to hydrate it.
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            current_user: None,
            liked_videos: Vec::new(),
            my_list_videos: Vec::new(),
        }
    }

    /// Load session state from storage. Missing or corrupt entries leave the
    /// corresponding field empty.
    pub async fn init(&mut self) -> Result<()> {
        self.current_user = self.load_or_default(&self.keys.user()).await?;
        self.liked_videos = self
            .load_or_default::<Vec<Video>>(&self.keys.liked())
            .await?
            .unwrap_or_default();
        self.my_list_videos = self
            .load_or_default::<Vec<Video>>(&self.keys.my_list())
            .await?
            .unwrap_or_default();

        tracing::debug!(
            signed_in = self.current_user.is_some(),
            liked = self.liked_videos.len(),
            my_list = self.my_list_videos.len(),
            "session hydrated"
        );
        Ok(())
    }

    async fn load_or_default<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match load_json(&self.storage, key).await {
            Ok(value) => Ok(value),
            Err(crate::error::ViewVoyageError::Json(e)) => {
                tracing::warn!(key, error = %e, "ignoring corrupt session entry");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn liked_videos(&self) -> &[Video] {
        &self.liked_videos
    }

    pub fn my_list_videos(&self) -> &[Video] {
        &self.my_list_videos
    }

    /// Sign in. Any non-empty pair is accepted and bound to the demo identity.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        self.set_current_user(Some(User::demo())).await;
        true
    }

    /// Sign up. Same rules as login, but the chosen username is kept.
    pub async fn signup(&mut self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        let user = User {
            username: username.to_string(),
            ..User::demo()
        };
        self.set_current_user(Some(user)).await;
        true
    }

    pub async fn logout(&mut self) {
        self.set_current_user(None).await;
    }

    /// Add or remove `video` from the liked set. Returns true if it is now liked.
    pub async fn toggle_like(&mut self, video: &Video) -> bool {
        let liked = toggle(&mut self.liked_videos, video);
        self.persist_liked().await;
        liked
    }

    /// Add or remove `video` from the watch later list. Returns true if it is
    /// now in the list.
    pub async fn toggle_my_list(&mut self, video: &Video) -> bool {
        let saved = toggle(&mut self.my_list_videos, video);
        self.persist_my_list().await;
        saved
    }

    pub fn is_video_liked(&self, video_id: &str) -> bool {
        self.liked_videos.iter().any(|v| v.id == video_id)
    }

    pub fn is_video_in_my_list(&self, video_id: &str) -> bool {
        self.my_list_videos.iter().any(|v| v.id == video_id)
    }

    async fn set_current_user(&mut self, user: Option<User>) {
        self.current_user = user;

        let key = self.keys.user();
        let result = match &self.current_user {
            Some(user) => save_json(&self.storage, &key, user).await,
            None => self.storage.remove(&key).await,
        };
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "failed to persist current user");
        }
    }

    async fn persist_liked(&self) {
        let key = self.keys.liked();
        if let Err(e) = save_json(&self.storage, &key, &self.liked_videos).await {
            tracing::warn!(key, error = %e, "failed to persist liked videos");
        }
    }

    async fn persist_my_list(&self) {
        let key = self.keys.my_list();
        if let Err(e) = save_json(&self.storage, &key, &self.my_list_videos).await {
            tracing::warn!(key, error = %e, "failed to persist watch later list");
        }
    }
}

/// Remove by id if present, else append a copy. Returns the new membership.
fn toggle(videos: &mut Vec<Video>, video: &Video) -> bool {
    if videos.iter().any(|v| v.id == video.id) {
        videos.retain(|v| v.id != video.id);
        false
    } else {
        videos.push(video.clone());
        true
    }
}
