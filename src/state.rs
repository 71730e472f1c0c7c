use crate::storage::FileStore;
use crate::tracker::Tracker;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared tracker; the mutex serialises every read-modify-write of the store.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker<FileStore>>>,
}

impl AppState {
    pub fn new(tracker: Tracker<FileStore>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
