use serde::{Deserialize, Serialize};

use super::item::{ItemId, ItemKind, SavedItem};

/// Saved items, newest first. Stored and replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    items: Vec<SavedItem>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ItemId) -> Option<&SavedItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Next free id: the creation time, bumped past every id already in use
    /// so items created within the same millisecond stay distinct.
    pub fn next_id(&self, now: i64) -> ItemId {
        match self.items.iter().map(|i| i.id).max() {
            Some(max) if max >= now => match max.checked_add(1) {
                Some(id) => id,
                // Ids at the top of the range came from storage; reuse any
                // free slot below them instead.
                None => self.free_id_below(now),
            },
            _ => now,
        }
    }

    fn free_id_below(&self, start: i64) -> ItemId {
        let mut id = start;
        while self.find(id).is_some() {
            id -= 1;
        }
        id
    }

    /// Create an item stamped `now` and put it at the front.
    pub fn prepend_new(&mut self, kind: ItemKind, content: String, now: i64) -> &SavedItem {
        let id = self.next_id(now);
        self.items.insert(0, SavedItem::new(kind, content, id, now));
        &self.items[0]
    }

    /// Returns true if an item was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Returns false if no item has this id.
    pub fn set_note(&mut self, id: ItemId, note: String) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.note = Some(note);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<SavedItem>> for Collection {
    fn from(items: Vec<SavedItem>) -> Self {
        Self { items }
    }
}
