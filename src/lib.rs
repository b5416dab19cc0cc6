pub mod app;
pub mod capture;
pub mod config;
pub mod error;
pub mod gallery;
pub mod items;
pub mod logging;
pub mod storage;

pub use app::Shelf;
pub use config::Config;
pub use error::{Result, ShelfError};
