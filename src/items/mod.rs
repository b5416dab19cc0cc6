pub mod collection;
pub mod item;

pub use collection::Collection;
pub use item::{now_millis, ItemId, ItemKind, SavedItem};
