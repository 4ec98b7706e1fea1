//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps each session key in its own file so the app stays signed in
//! across restarts on desktop and mobile.
//!
//! ```text
//! <base_dir>/
//! └── session/
//!     ├── token
//!     ├── role
//!     ├── user
//!     └── settings
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base (see the `ui` crate).
//! Write failures are logged and otherwise ignored: the in-memory state stays
//! correct for the current run.

use std::path::PathBuf;

use crate::session::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_dir(&self) -> PathBuf {
        self.base.join("session")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.session_dir().join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn put(&self, key: &str, value: String) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!("Failed to remove {}: {}", key, e);
            }
        }
    }
}
