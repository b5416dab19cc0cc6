use std::sync::Arc;
use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::error::Result;
use crate::items::{now_millis, Collection, ItemKind, SavedItem};

/// The saved-item collection, kept under one slot of a [`KeyValueStore`].
///
/// Every mutation is a read-modify-write of the whole collection. Cycles
/// issued through clones of the same `ItemStore` are serialized, so a
/// capture landing while the gallery deletes cannot overwrite it. Separate
/// processes sharing one backing store are still last-writer-wins.
#[derive(Clone)]
pub struct ItemStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl ItemStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Absent slot reads as an empty collection.
    pub async fn load(&self) -> Result<Collection> {
        match self.backend.get(&self.key).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Collection::new()),
        }
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        let value = serde_json::to_value(collection)?;
        self.backend.set(&self.key, value).await
    }

    /// Apply `f` to the current collection and write the result back as
    /// one serialized step.
    pub async fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Collection) -> T,
    {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.load().await?;
        let out = f(&mut collection);
        self.save(&collection).await?;
        Ok(out)
    }

    /// Like [`update`](Self::update), but only writes back when `f`
    /// reports a change.
    pub async fn modify<F>(&self, f: F) -> Result<bool>
    where
        F: FnOnce(&mut Collection) -> bool,
    {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.load().await?;
        let changed = f(&mut collection);
        if changed {
            self.save(&collection).await?;
        }
        Ok(changed)
    }

    pub async fn add(&self, kind: ItemKind, content: String) -> Result<SavedItem> {
        self.update(|c| c.prepend_new(kind, content, now_millis()).clone())
            .await
    }

    pub async fn replace(&self, collection: Collection) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.save(&collection).await
    }
}
