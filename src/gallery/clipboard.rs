use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;

pub const COPIED_LABEL: &str = "Copied!";

/// Host clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Label of a copy control. Clones share the same label.
#[derive(Clone)]
pub struct CopyButton {
    label: Arc<Mutex<String>>,
    original: String,
    generation: Arc<AtomicU64>,
}

impl CopyButton {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            label: Arc::new(Mutex::new(label.clone())),
            original: label,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn label(&self) -> String {
        self.label.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_label(&self, text: &str) {
        *self.label.lock().unwrap_or_else(|e| e.into_inner()) = text.to_string();
    }

    /// Show "Copied!" for `feedback`, then put the original label back.
    /// A newer acknowledgement restarts the interval.
    fn acknowledge(&self, feedback: Duration) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_label(COPIED_LABEL);

        let button = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(feedback).await;
            if button.generation.load(Ordering::SeqCst) == generation {
                button.set_label(&button.original);
            }
        });
    }
}

pub async fn copy_to_clipboard(
    clipboard: &dyn Clipboard,
    text: &str,
    button: &CopyButton,
    feedback: Duration,
) -> Result<()> {
    match clipboard.write_text(text).await {
        Ok(()) => {
            button.acknowledge(feedback);
            Ok(())
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            Err(e)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryClipboard;
    use super::*;

    const FEEDBACK: Duration = Duration::from_millis(1500);

    #[tokio::test(start_paused = true)]
    async fn test_copied_label_reverts_after_interval() {
        let clipboard = MemoryClipboard::default();
        let button = CopyButton::new("Copy");

        copy_to_clipboard(&clipboard, "hello", &button, FEEDBACK)
            .await
            .unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("hello"));
        assert_eq!(button.label(), "Copied!");

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(button.label(), "Copied!");

        tokio::time::sleep(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        assert_eq!(button.label(), "Copy");
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_copy_restarts_interval() {
        let clipboard = MemoryClipboard::default();
        let button = CopyButton::new("Copy");

        copy_to_clipboard(&clipboard, "a", &button, FEEDBACK).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        copy_to_clipboard(&clipboard, "b", &button, FEEDBACK).await.unwrap();

        tokio::time::sleep(Duration::from_millis(700)).await;
        tokio::task::yield_now().await;
        assert_eq!(button.label(), "Copied!");

        tokio::time::sleep(Duration::from_millis(900)).await;
        tokio::task::yield_now().await;
        assert_eq!(button.label(), "Copy");
    }

    #[tokio::test]
    async fn test_denied_clipboard_leaves_label() {
        let clipboard = MemoryClipboard::denied();
        let button = CopyButton::new("Copy");

        assert!(copy_to_clipboard(&clipboard, "x", &button, FEEDBACK)
            .await
            .is_err());
        assert_eq!(button.label(), "Copy");
    }
}
