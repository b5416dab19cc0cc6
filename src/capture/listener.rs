use super::menu::{
    default_menus, ClickInfo, ContextMenuHost, SAVE_IMAGE_MENU_ID, SAVE_TEXT_MENU_ID,
};
use crate::error::Result;
use crate::items::{ItemKind, SavedItem};
use crate::storage::ItemStore;

/// Background listener that turns context-menu clicks into saved items.
#[derive(Clone)]
pub struct CaptureListener {
    store: ItemStore,
}

impl CaptureListener {
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }

    pub fn on_install(&self, host: &mut dyn ContextMenuHost) -> Result<()> {
        for descriptor in default_menus() {
            log::debug!("Registering context menu {:?}", descriptor.id);
            host.register(descriptor)?;
        }
        Ok(())
    }

    /// Persist the clicked image or selection. Failures are logged and
    /// otherwise swallowed; `None` means nothing was saved.
    pub async fn on_menu_invoked(&self, menu_id: &str, info: ClickInfo) -> Option<SavedItem> {
        let (kind, content) = match menu_id {
            SAVE_IMAGE_MENU_ID => (ItemKind::Image, info.source_url.unwrap_or_default()),
            SAVE_TEXT_MENU_ID => (ItemKind::Text, info.selected_text.unwrap_or_default()),
            other => {
                log::debug!("Ignoring unknown menu id {:?}", other);
                return None;
            }
        };

        match self.store.add(kind, content).await {
            Ok(item) => {
                log::debug!(
                    "{} saved: id={} len={}",
                    kind.label(),
                    item.id,
                    item.content.len()
                );
                Some(item)
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", kind.label().to_lowercase(), e);
                None
            }
        }
    }
}
