use std::sync::Arc;

use crate::capture::{CaptureListener, ClickInfo, ContextMenuHost};
use crate::config::Config;
use crate::error::Result;
use crate::gallery::{Clipboard, Gallery};
use crate::items::SavedItem;
use crate::storage::{ItemStore, KeyValueStore, SqliteStore};

/// One shelf: the background capture listener plus the gallery it feeds,
/// both talking only through the shared item store.
pub struct Shelf {
    config: Config,
    store: ItemStore,
    capture: CaptureListener,
}

impl Shelf {
    /// Start logging and open the SQLite store under the configured data dir.
    pub fn start(config: Config) -> Result<Self> {
        crate::logging::init(&config.data_dir);
        let backend = SqliteStore::open(&config.data_dir)?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    pub fn with_backend(config: Config, backend: Arc<dyn KeyValueStore>) -> Self {
        let store = ItemStore::new(backend, config.storage_key.clone());
        let capture = CaptureListener::new(store.clone());
        Self {
            config,
            store,
            capture,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn on_installed(&self, host: &mut dyn ContextMenuHost) -> Result<()> {
        self.capture.on_install(host)
    }

    pub async fn on_menu_clicked(&self, menu_id: &str, info: ClickInfo) -> Option<SavedItem> {
        self.capture.on_menu_invoked(menu_id, info).await
    }

    pub async fn open_gallery(&self, clipboard: Arc<dyn Clipboard>) -> Result<Gallery> {
        Gallery::open(self.store.clone(), clipboard, self.config.copy_feedback).await
    }
}
