//! Video catalog

use super::seed::demo_videos;
use super::{KeyValueStore, StorageKeys, load_json, save_json};
use crate::error::{Result, ViewVoyageError};
use crate::types::{Comment, NewVideo, User, Video};
use chrono::Utc;

/// Catalog store. Owns every video and its comments.
pub struct CatalogStore<S: KeyValueStore> {
    storage: S,
    keys: StorageKeys,
    videos: Vec<Video>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            videos: Vec::new(),
        }
    }

    /// Load the catalog from storage, seeding the demo videos if nothing is
    /// stored. A corrupt entry falls back to the demo videos without
    /// overwriting it.
    pub async fn init(&mut self) -> Result<()> {
        let key = self.keys.videos();

        match load_json::<_, Vec<Video>>(&self.storage, &key).await {
            Ok(Some(videos)) => {
                tracing::debug!(count = videos.len(), "catalog hydrated");
                self.videos = videos;
            }
            Ok(None) => {
                self.videos = demo_videos();
                tracing::debug!(count = self.videos.len(), "catalog seeded");
                self.persist().await;
            }
            Err(ViewVoyageError::Json(e)) => {
                // The corrupt entry stays on disk until the next mutation
                tracing::warn!(key, error = %e, "stored catalog is corrupt, using demo videos");
                self.videos = demo_videos();
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// All videos in insertion order
    pub fn list(&self) -> &[Video] {
        &self.videos
    }

    /// Videos whose title or description contains `query`, ignoring case
    pub fn filtered(&self, query: &str) -> Vec<&Video> {
        let needle = query.to_lowercase();
        self.videos.iter().filter(|v| v.matches(&needle)).collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Up to `limit` videos other than `id`, in catalog order
    pub fn recommended(&self, id: &str, limit: usize) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.id != id)
            .take(limit)
            .collect()
    }

    /// Append a new video and return it
    pub async fn add_video(&mut self, data: NewVideo) -> Video {
        let id = next_id("video", |candidate| self.get_by_id(candidate).is_some());

        let video = Video {
            id,
            title: data.title,
            description: data.description,
            thumbnail_url: data.thumbnail_url,
            video_url: data.video_url,
            upload_date: data.upload_date,
            duration_seconds: data.duration_seconds,
            view_count: 0,
            like_count: 0,
            owner: data.owner,
            comments: Vec::new(),
        };

        tracing::debug!(id = %video.id, title = %video.title, "video added");
        self.videos.push(video.clone());
        self.persist().await;
        video
    }

    /// Add a comment to the front of a video's comments (newest first).
    /// Returns None for an unknown video or blank text.
    pub async fn add_comment(
        &mut self,
        video_id: &str,
        author: &User,
        text: &str,
    ) -> Option<Comment> {
        if text.trim().is_empty() {
            return None;
        }

        let video = self.videos.iter_mut().find(|v| v.id == video_id)?;
        let id = next_id("comment", |candidate| {
            video.comments.iter().any(|c| c.id == candidate)
        });

        let comment = Comment {
            id,
            text: text.to_string(),
            author: author.clone(),
            timestamp: Utc::now(),
            like_count: 0,
        };
        video.comments.insert(0, comment.clone());

        tracing::debug!(video_id, comment_id = %comment.id, "comment added");
        self.persist().await;
        Some(comment)
    }

    async fn persist(&self) {
        let key = self.keys.videos();
        if let Err(e) = save_json(&self.storage, &key, &self.videos).await {
            tracing::warn!(key, error = %e, "failed to persist catalog");
        }
    }
}

/// `<prefix>-<unix millis>`, bumped until `taken` rejects it
fn next_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let id = format!("{}-{}", prefix, stamp);
        if !taken(&id) {
            return id;
        }
        stamp += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::storage::testing::FailingStore;
    use std::collections::HashSet;

    async fn seeded() -> (CatalogStore<MemoryStore>, MemoryStore) {
        let storage = MemoryStore::new();
        let mut catalog = CatalogStore::new(storage.clone(), StorageKeys::default());
        catalog.init().await.unwrap();
        (catalog, storage)
    }

    fn upload(title: &str) -> NewVideo {
        NewVideo {
            title: title.into(),
            description: "fresh upload".into(),
            thumbnail_url: "thumb".into(),
            video_url: "file:///tmp/clip.mp4".into(),
            upload_date: Utc::now(),
            duration_seconds: 120,
            owner: User::guest(),
        }
    }

    #[tokio::test]
    async fn test_init_seeds_and_persists_demo_catalog() {
        let (catalog, storage) = seeded().await;
        assert_eq!(catalog.list(), demo_videos().as_slice());
        assert!(storage.contains("viewvoyage-videos"));
    }

    #[tokio::test]
    async fn test_init_keeps_stored_empty_catalog() {
        let storage = MemoryStore::new();
        storage.set("viewvoyage-videos", "[]").await.unwrap();

        let mut catalog = CatalogStore::new(storage, StorageKeys::default());
        catalog.init().await.unwrap();
        assert!(catalog.list().is_empty());
    }

    #[tokio::test]
    async fn test_init_falls_back_on_corrupt_catalog_without_overwriting() {
        let storage = MemoryStore::new();
        storage.set("viewvoyage-videos", "[{").await.unwrap();

        let mut catalog = CatalogStore::new(storage.clone(), StorageKeys::default());
        catalog.init().await.unwrap();
        assert_eq!(catalog.list().len(), 6);
        assert_eq!(
            storage.get("viewvoyage-videos").await.unwrap().as_deref(),
            Some("[{")
        );
    }

    #[tokio::test]
    async fn test_comment_text_is_stored_as_typed() {
        let (mut catalog, _) = seeded().await;
        let comment = catalog
            .add_comment("1", &User::demo(), "  indented\n  code  ")
            .await
            .unwrap();
        assert_eq!(comment.text, "  indented\n  code  ");
        assert_eq!(
            catalog.get_by_id("1").unwrap().comments[0].text,
            "  indented\n  code  "
        );
    }

    #[tokio::test]
    async fn test_failed_writes_keep_in_memory_changes() {
        let mut catalog = CatalogStore::new(FailingStore, StorageKeys::default());
        catalog.init().await.unwrap();
        assert_eq!(catalog.list().len(), 6);

        let video = catalog.add_video(upload("unsaved")).await;
        assert_eq!(catalog.get_by_id(&video.id), Some(&video));

        let comment = catalog.add_comment("1", &User::demo(), "hi").await.unwrap();
        assert_eq!(comment.text, "hi");
        assert_eq!(catalog.get_by_id("1").unwrap().comments[0], comment);
    }

    #[tokio::test]
    async fn test_filtered_empty_query_returns_everything_in_order() {
        let (catalog, _) = seeded().await;
        let all: Vec<&Video> = catalog.list().iter().collect();
        assert_eq!(catalog.filtered(""), all);
    }

    #[tokio::test]
    async fn test_filtered_matches_title_or_description_ignoring_case() {
        let (catalog, _) = seeded().await;

        let ids = |q: &str| -> Vec<String> {
            catalog.filtered(q).iter().map(|v| v.id.clone()).collect()
        };

        // Title only
        assert_eq!(ids("OCEAN"), ["3"]);
        // Description only
        assert_eq!(ids("village elders"), ["5"]);
        // Several matches keep catalog order
        assert_eq!(ids("photo"), ["4", "6"]);
        assert!(ids("no such thing").is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (catalog, _) = seeded().await;
        assert_eq!(
            catalog.get_by_id("2").map(|v| v.title.as_str()),
            Some("Urban Exploration: Hidden City")
        );
        assert!(catalog.get_by_id("missing").is_none());
    }

    #[tokio::test]
    async fn test_recommended_excludes_current_video() {
        let (catalog, _) = seeded().await;
        let ids: Vec<&str> = catalog
            .recommended("2", 4)
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3", "4", "5"]);
        assert_eq!(catalog.recommended("1", 10).len(), 5);
    }

    #[tokio::test]
    async fn test_add_video_assigns_fresh_id_and_zeroed_counters() {
        let (mut catalog, _) = seeded().await;

        let mut ids: HashSet<String> = catalog.list().iter().map(|v| v.id.clone()).collect();
        for i in 0..5 {
            let video = catalog.add_video(upload(&format!("clip {}", i))).await;
            assert!(video.id.starts_with("video-"));
            assert!(ids.insert(video.id.clone()), "duplicate id {}", video.id);
            assert!(video.comments.is_empty());
            assert_eq!(video.like_count, 0);
            assert_eq!(video.view_count, 0);
        }

        assert_eq!(catalog.list().len(), 11);
        assert_eq!(catalog.list().last().unwrap().title, "clip 4");
    }

    #[tokio::test]
    async fn test_add_comment_prepends_and_persists() {
        let (mut catalog, storage) = seeded().await;
        let author = User::demo();

        let comment = catalog.add_comment("1", &author, "  Lovely  ").await.unwrap();
        assert_eq!(comment.text, "  Lovely  ");
        assert_eq!(comment.like_count, 0);
        assert_eq!(comment.author, author);

        let video = catalog.get_by_id("1").unwrap();
        assert_eq!(video.comments.len(), 2);
        assert_eq!(video.comments[0], comment);
        assert_eq!(video.comments[1].id, "c1");

        let mut reloaded = CatalogStore::new(storage, StorageKeys::default());
        reloaded.init().await.unwrap();
        assert_eq!(reloaded.get_by_id("1").unwrap().comments[0], comment);
    }

    #[tokio::test]
    async fn test_add_comment_rejects_blank_text_and_unknown_video() {
        let (mut catalog, _) = seeded().await;
        let author = User::demo();

        assert!(catalog.add_comment("1", &author, "   ").await.is_none());
        assert!(catalog.add_comment("missing", &author, "hi").await.is_none());
        assert_eq!(catalog.get_by_id("1").unwrap().comments.len(), 1);
    }

    #[tokio::test]
    async fn test_comment_ids_are_unique_within_a_video() {
        let (mut catalog, _) = seeded().await;
        let author = User::demo();

        let a = catalog.add_comment("3", &author, "first").await.unwrap();
        let b = catalog.add_comment("3", &author, "second").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(catalog.get_by_id("3").unwrap().comments[0].text, "second");
    }

    #[tokio::test]
    async fn test_reload_reproduces_catalog() {
        let (mut catalog, storage) = seeded().await;
        catalog.add_video(upload("persisted")).await;

        let mut reloaded = CatalogStore::new(storage, StorageKeys::default());
        reloaded.init().await.unwrap();
        assert_eq!(reloaded.list(), catalog.list());
    }
}
