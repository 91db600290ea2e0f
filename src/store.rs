//! Flat file store.
//!
//! One file per name directly under a root directory. Names come straight
//! from the client and are not sanitised: a name containing `/` or `..`
//! resolves wherever the filesystem takes it, and an absolute name replaces
//! the root entirely. Writers to the same name race; the last one wins.

use std::path::PathBuf;

use tokio::fs::File;
use tracing::debug;

/// Handle to the backing directory. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the entry called `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Creates the entry, truncating any previous content.
    pub async fn create(&self, name: &str) -> std::io::Result<File> {
        let path = self.path(name);
        debug!(path = %path.display(), "creating store entry");
        File::create(path).await
    }

    /// Opens the entry for reading.
    pub async fn open(&self, name: &str) -> std::io::Result<File> {
        let path = self.path(name);
        debug!(path = %path.display(), "opening store entry");
        File::open(path).await
    }
}
