pub mod app;
pub mod calendar;
pub mod catalog;
pub mod clock;
pub mod completion;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod keys;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod theme;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{open_file_store, resolve_data_path, FileStore, KeyValueStore, MemoryStore};
pub use tracker::Tracker;
