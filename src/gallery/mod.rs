pub mod clipboard;
pub mod html;
pub mod modal;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::items::{Collection, ItemId, ItemKind, SavedItem};
use crate::storage::ItemStore;

pub use clipboard::{Clipboard, CopyButton};
pub use html::render_html;
pub use modal::{Modal, NoteDraft};
pub use view::{Card, CardAction, CardBody, GalleryView};

pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to delete all saved items?";

/// Host confirmation dialog.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Foreground view over the saved items. Lives only while the popup is
/// open; every mutation goes through the store and ends in a re-render.
pub struct Gallery {
    store: ItemStore,
    clipboard: Arc<dyn Clipboard>,
    copy_feedback: Duration,
    view: GalleryView,
    manual_add: Modal<String>,
    note_editor: Modal<NoteDraft>,
}

impl Gallery {
    pub async fn open(
        store: ItemStore,
        clipboard: Arc<dyn Clipboard>,
        copy_feedback: Duration,
    ) -> Result<Self> {
        let mut gallery = Self {
            store,
            clipboard,
            copy_feedback,
            view: view::render(&Collection::new()),
            manual_add: Modal::Closed,
            note_editor: Modal::Closed,
        };
        gallery.load_and_render().await?;
        Ok(gallery)
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn html(&self) -> String {
        render_html(&self.view)
    }

    pub async fn load_and_render(&mut self) -> Result<&GalleryView> {
        let collection = self.store.load().await?;
        self.view = view::render(&collection);
        Ok(&self.view)
    }

    /// Unknown ids are a no-op.
    pub async fn delete_item(&mut self, id: ItemId) -> Result<&GalleryView> {
        if self.store.modify(|c| c.remove(id)).await? {
            log::debug!("Deleted item {}", id);
        }
        self.load_and_render().await
    }

    /// Returns whether the user confirmed.
    pub async fn clear_all(&mut self, prompt: &dyn Confirm) -> Result<bool> {
        if !prompt.confirm(CLEAR_ALL_PROMPT) {
            return Ok(false);
        }
        self.store.replace(Collection::new()).await?;
        log::info!("Cleared all saved items");
        self.load_and_render().await?;
        Ok(true)
    }

    // ── Manual add surface ──────────────────────────────────────────────

    pub fn manual_add(&self) -> &Modal<String> {
        &self.manual_add
    }

    pub fn open_manual_add(&mut self) {
        self.manual_add.open(String::new());
    }

    pub fn edit_manual_text(&mut self, text: &str) {
        if let Some(draft) = self.manual_add.state_mut() {
            *draft = text.to_string();
        }
    }

    pub async fn confirm_manual_add(&mut self) -> Result<Option<SavedItem>> {
        let text = match self.manual_add.state() {
            Some(draft) => draft.clone(),
            None => return Ok(None),
        };
        self.add_manual_text(&text).await
    }

    /// Blank input is ignored and leaves the surface as it was.
    pub async fn add_manual_text(&mut self, text: &str) -> Result<Option<SavedItem>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let item = self.store.add(ItemKind::Text, text.to_string()).await?;
        log::debug!("Text saved manually: id={}", item.id);
        self.manual_add.close();
        self.load_and_render().await?;
        Ok(Some(item))
    }

    pub fn cancel_manual_add(&mut self) {
        self.manual_add.cancel();
    }

    pub fn dismiss_manual_add(&mut self) {
        self.manual_add.dismiss();
    }

    // ── Note editor surface ─────────────────────────────────────────────

    pub fn note_editor(&self) -> &Modal<NoteDraft> {
        &self.note_editor
    }

    /// Returns false, leaving the editor untouched, if the item is gone.
    pub async fn open_note_editor(&mut self, id: ItemId) -> Result<bool> {
        let collection = self.store.load().await?;
        match collection.find(id) {
            Some(item) => {
                self.note_editor.open(NoteDraft::for_item(item));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn edit_note_text(&mut self, text: &str) {
        if let Some(draft) = self.note_editor.state_mut() {
            draft.text = text.to_string();
        }
    }

    pub async fn confirm_note(&mut self) -> Result<bool> {
        let text = match self.note_editor.state() {
            Some(draft) => draft.text.clone(),
            None => return Ok(false),
        };
        self.save_note(&text).await
    }

    /// Store the trimmed note on the item being edited. An empty note is
    /// kept as `Some("")`. Returns false if no editor is open or its item
    /// has been deleted meanwhile; the editor then stays as it was.
    pub async fn save_note(&mut self, text: &str) -> Result<bool> {
        let target = match self.note_editor.state() {
            Some(draft) => draft.item_id,
            None => return Ok(false),
        };

        let note = text.trim().to_string();
        if !self.store.modify(|c| c.set_note(target, note)).await? {
            log::debug!("Note target {} no longer exists", target);
            return Ok(false);
        }

        self.note_editor.close();
        self.load_and_render().await?;
        Ok(true)
    }

    pub fn cancel_note(&mut self) {
        self.note_editor.cancel();
    }

    pub fn dismiss_note(&mut self) {
        self.note_editor.dismiss();
    }

    // ── Clipboard ───────────────────────────────────────────────────────

    pub async fn copy_to_clipboard(&self, text: &str, button: &CopyButton) -> Result<()> {
        clipboard::copy_to_clipboard(self.clipboard.as_ref(), text, button, self.copy_feedback)
            .await
    }
}
