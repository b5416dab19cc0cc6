use crate::items::{ItemId, SavedItem};

/// A modal input surface: closed, or open with its working state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal<S> {
    Closed,
    Open(S),
}

impl<S> Default for Modal<S> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<S> Modal<S> {
    /// Replaces any state already open.
    pub fn open(&mut self, prefill: S) {
        *self = Modal::Open(prefill);
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn state(&self) -> Option<&S> {
        match self {
            Modal::Open(s) => Some(s),
            Modal::Closed => None,
        }
    }

    pub fn state_mut(&mut self) -> Option<&mut S> {
        match self {
            Modal::Open(s) => Some(s),
            Modal::Closed => None,
        }
    }

    /// Close after a successful confirm.
    pub fn close(&mut self) -> Option<S> {
        match std::mem::take(self) {
            Modal::Open(s) => Some(s),
            Modal::Closed => None,
        }
    }

    /// Close and throw the draft away.
    pub fn cancel(&mut self) {
        *self = Modal::Closed;
    }

    /// Click outside the surface. Same as cancel.
    pub fn dismiss(&mut self) {
        self.cancel();
    }
}

/// Working state of the note editor: which item, and the text so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub item_id: ItemId,
    pub text: String,
    had_note: bool,
}

impl NoteDraft {
    pub fn for_item(item: &SavedItem) -> Self {
        Self {
            item_id: item.id,
            text: item.note.clone().unwrap_or_default(),
            had_note: item.has_note(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.had_note {
            "Edit Note"
        } else {
            "Add Note"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    #[test]
    fn test_transitions() {
        let mut modal: Modal<String> = Modal::default();
        assert!(!modal.is_open());

        modal.open(String::new());
        modal.state_mut().unwrap().push_str("draft");
        assert_eq!(modal.state().map(String::as_str), Some("draft"));

        modal.dismiss();
        assert_eq!(modal, Modal::Closed);

        modal.open("again".to_string());
        assert_eq!(modal.close().as_deref(), Some("again"));
        assert!(modal.close().is_none());
    }

    #[test]
    fn test_note_draft_prefill_and_title() {
        let mut item = SavedItem::new(ItemKind::Image, "u".into(), 1, 1);
        let draft = NoteDraft::for_item(&item);
        assert_eq!(draft.text, "");
        assert_eq!(draft.title(), "Add Note");

        item.note = Some("important".into());
        let draft = NoteDraft::for_item(&item);
        assert_eq!(draft.text, "important");
        assert_eq!(draft.title(), "Edit Note");
    }
}
