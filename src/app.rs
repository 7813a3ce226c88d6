//! Application state: one session store and one catalog store over a shared
//! storage backend, constructed once and hydrated explicitly.

use crate::error::Result;
use crate::storage::catalog::CatalogStore;
use crate::storage::session::SessionStore;
use crate::storage::{KeyValueStore, StorageKeys};

pub struct App<S: KeyValueStore> {
    pub session: SessionStore<S>,
    pub catalog: CatalogStore<S>,
}

impl<S: KeyValueStore + Clone> App<S> {
    pub fn new(storage: S, prefix: &str) -> Self {
        let keys = StorageKeys::new(prefix);
        Self {
            session: SessionStore::new(storage.clone(), keys.clone()),
            catalog: CatalogStore::new(storage, keys),
        }
    }

    /// Hydrate both stores from storage
    pub async fn init(&mut self) -> Result<()> {
        self.session.init().await?;
        self.catalog.init().await?;
        Ok(())
    }
}
