pub mod listener;
pub mod menu;

pub use listener::CaptureListener;
pub use menu::{ClickInfo, ContextMenuHost, MenuContext, MenuDescriptor};
