use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

pub type ItemId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Image,
    Text,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Image => "Image",
            ItemKind::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, deserialize_with = "missing_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: i64,
}

impl SavedItem {
    pub fn new(kind: ItemKind, content: String, id: ItemId, timestamp: i64) -> Self {
        Self {
            id,
            kind,
            content,
            note: None,
            timestamp,
        }
    }

    /// A note that is present but empty counts as "no note" for display.
    pub fn has_note(&self) -> bool {
        self.note.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Captures of an undefined URL or selection were stored without a
/// `content` value, or with `null`.
fn missing_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape_matches_extension_storage() {
        let item = SavedItem::new(ItemKind::Image, "https://x/y.png".into(), 7, 7);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "type": "image", "content": "https://x/y.png", "timestamp": 7})
        );
    }

    #[test]
    fn test_missing_or_null_content_reads_as_empty() {
        let raw = json!([
            {"type": "image", "timestamp": 1, "id": 1},
            {"type": "text", "content": null, "timestamp": 2, "id": 2}
        ]);
        let items: Vec<SavedItem> = serde_json::from_value(raw).unwrap();
        assert_eq!(items[0].content, "");
        assert_eq!(items[0].kind, ItemKind::Image);
        assert_eq!(items[1].content, "");
    }

    #[test]
    fn test_empty_note_is_kept_distinct_from_absent() {
        let raw = json!([
            {"id": 1, "type": "text", "content": "a", "timestamp": 1},
            {"id": 2, "type": "text", "content": "b", "note": "", "timestamp": 2}
        ]);
        let items: Vec<SavedItem> = serde_json::from_value(raw).unwrap();
        assert_eq!(items[0].note, None);
        assert_eq!(items[1].note.as_deref(), Some(""));
        assert!(!items[1].has_note());

        let back = serde_json::to_value(&items[1]).unwrap();
        assert_eq!(back["note"], json!(""));
    }
}
