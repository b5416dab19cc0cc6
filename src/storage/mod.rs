pub mod memory;
pub mod repository;
pub mod sqlite;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use memory::MemoryStore;
pub use repository::ItemStore;
pub use sqlite::SqliteStore;

/// Host persistent key-value storage. Each key holds one whole JSON value;
/// there are no partial updates.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>>;
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}
