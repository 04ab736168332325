//! In-memory folder store for testing.
//!
//! Serves folders from a map, records every lookup, and can be told to fail
//! or stall specific ids so failure and cancellation paths can be exercised
//! without a server.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::models::Folder;
use crate::traits::{FolderLookup, FolderLookupError};

/// In-memory [`FolderLookup`] implementation.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect recorded lookups through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFolders {
    /// Folders in insertion order
    folders: Arc<Mutex<Vec<Folder>>>,
    /// Injected failures by folder id
    failures: Arc<Mutex<HashMap<String, FolderLookupError>>>,
    /// Failure for `list_all_folders`
    list_failure: Arc<Mutex<Option<FolderLookupError>>>,
    /// Artificial latency per lookup
    delay: Arc<Mutex<Option<Duration>>>,
    /// Ids passed to `get_folder_by_id`, in call order
    lookups: Arc<Mutex<Vec<String>>>,
}

impl InMemoryFolders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_folders(folders: Vec<Folder>) -> Self {
        let store = Self::new();
        *store.folders.lock().unwrap() = folders;
        store
    }

    /// Add or replace a folder.
    pub fn insert(&self, folder: Folder) {
        let mut folders = self.folders.lock().unwrap();
        match folders.iter_mut().find(|f| f.id == folder.id) {
            Some(existing) => *existing = folder,
            None => folders.push(folder),
        }
    }

    pub fn remove(&self, id: &str) {
        self.folders.lock().unwrap().retain(|f| f.id != id);
    }

    /// Make lookups of `id` fail with `error`.
    pub fn fail_on(&self, id: &str, error: FolderLookupError) {
        self.failures.lock().unwrap().insert(id.to_string(), error);
    }

    /// Make `list_all_folders` fail with `error`.
    pub fn fail_list(&self, error: FolderLookupError) {
        *self.list_failure.lock().unwrap() = Some(error);
    }

    /// Delay every lookup by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Ids looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn clear_lookups(&self) {
        self.lookups.lock().unwrap().clear();
    }

    fn current_delay(&self) -> Option<Duration> {
        *self.delay.lock().unwrap()
    }
}

#[async_trait]
impl FolderLookup for InMemoryFolders {
    async fn list_all_folders(&self) -> Result<Vec<Folder>, FolderLookupError> {
        if let Some(delay) = self.current_delay() {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.list_failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.folders.lock().unwrap().clone())
    }

    async fn get_folder_by_id(&self, id: &str) -> Result<Folder, FolderLookupError> {
        self.lookups.lock().unwrap().push(id.to_string());

        if let Some(delay) = self.current_delay() {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.failures.lock().unwrap().get(id).cloned() {
            return Err(err);
        }

        self.folders
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| FolderLookupError::NotFound(id.to_string()))
    }
}
