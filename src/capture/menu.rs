use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const SAVE_IMAGE_MENU_ID: &str = "saveImage";
pub const SAVE_TEXT_MENU_ID: &str = "saveText";

/// Page context a menu entry is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuContext {
    Image,
    Selection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDescriptor {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,
}

impl MenuDescriptor {
    pub fn new(id: &str, title: &str, contexts: &[MenuContext]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            contexts: contexts.to_vec(),
        }
    }
}

/// The two entries registered on install.
pub fn default_menus() -> [MenuDescriptor; 2] {
    [
        MenuDescriptor::new(
            SAVE_IMAGE_MENU_ID,
            "Save image to extension",
            &[MenuContext::Image],
        ),
        MenuDescriptor::new(
            SAVE_TEXT_MENU_ID,
            "Save text to extension",
            &[MenuContext::Selection],
        ),
    ]
}

/// What the host reports about the right-clicked target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    #[serde(default, alias = "srcUrl")]
    pub source_url: Option<String>,
    #[serde(default, alias = "selectionText")]
    pub selected_text: Option<String>,
}

impl ClickInfo {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            source_url: Some(url.into()),
            selected_text: None,
        }
    }

    pub fn selection(text: impl Into<String>) -> Self {
        Self {
            source_url: None,
            selected_text: Some(text.into()),
        }
    }
}

/// Host context-menu registry. Re-registering on update is the host's
/// concern.
pub trait ContextMenuHost {
    fn register(&mut self, descriptor: MenuDescriptor) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_click_info_accepts_browser_field_names() {
        let info: ClickInfo =
            serde_json::from_value(json!({"srcUrl": "https://x/y.png"})).unwrap();
        assert_eq!(info, ClickInfo::image("https://x/y.png"));

        let info: ClickInfo = serde_json::from_value(json!({"selectionText": "hi"})).unwrap();
        assert_eq!(info, ClickInfo::selection("hi"));
    }

    #[test]
    fn test_default_menus_are_scoped() {
        let [image, text] = default_menus();
        assert_eq!(image.contexts, vec![MenuContext::Image]);
        assert_eq!(text.contexts, vec![MenuContext::Selection]);
    }
}
