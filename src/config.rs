use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, ShelfError};

/// Storage slot the collection lives under. Matches the browser
/// extension's `chrome.storage.local` key so exported data stays readable.
pub const DEFAULT_STORAGE_KEY: &str = "savedItems";

/// How long a copy button shows "Copied!" before reverting.
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub copy_feedback: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            copy_feedback: Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = lookup("CLIPSHELF_DATA_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let storage_key = lookup("CLIPSHELF_STORAGE_KEY")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        let copy_feedback_ms = match lookup("CLIPSHELF_COPY_FEEDBACK_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ShelfError::Config(format!("CLIPSHELF_COPY_FEEDBACK_MS={:?}: {}", raw, e))
            })?,
            None => DEFAULT_COPY_FEEDBACK_MS,
        };

        Ok(Self {
            data_dir,
            storage_key,
            copy_feedback: Duration::from_millis(copy_feedback_ms),
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("clipshelf"))
        .unwrap_or_else(|| PathBuf::from(".clipshelf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.storage_key, "savedItems");
        assert_eq!(config.copy_feedback, Duration::from_millis(1500));
        assert!(config.data_dir.ends_with("clipshelf") || config.data_dir.ends_with(".clipshelf"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CLIPSHELF_DATA_DIR", "/tmp/shelf"),
            ("CLIPSHELF_STORAGE_KEY", "items"),
            ("CLIPSHELF_COPY_FEEDBACK_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shelf"));
        assert_eq!(config.storage_key, "items");
        assert_eq!(config.copy_feedback, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_feedback_duration_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("CLIPSHELF_COPY_FEEDBACK_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
    }
}
