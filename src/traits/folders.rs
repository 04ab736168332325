//! Folder lookup trait abstraction.
//!
//! The hierarchy and breadcrumb logic only ever needs two things from the
//! outside world: the full folder list and a single folder by id. This trait
//! is that seam, implemented by the HTTP API client and by in-memory test
//! doubles.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Folder;

/// Errors a folder lookup can fail with.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FolderLookupError {
    /// The id does not name any folder.
    #[error("folder not found: {0}")]
    NotFound(String),

    /// The backing service could not be reached or answered with an error.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backing service answered with something that is not a folder.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl FolderLookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolderLookupError::NotFound(_))
    }
}

/// Read access to the folder collection.
///
/// # Example
///
/// ```ignore
/// use mediahub::traits::FolderLookup;
///
/// async fn names<L: FolderLookup>(lookup: &L) -> Vec<String> {
///     match lookup.list_all_folders().await {
///         Ok(folders) => folders.into_iter().map(|f| f.name).collect(),
///         Err(_) => Vec::new(),
///     }
/// }
/// ```
#[async_trait]
pub trait FolderLookup: Send + Sync {
    /// Fetch every folder, in the order the backend returns them.
    async fn list_all_folders(&self) -> Result<Vec<Folder>, FolderLookupError>;

    /// Fetch one folder. Fails with [`FolderLookupError::NotFound`] when the
    /// id does not resolve.
    async fn get_folder_by_id(&self, id: &str) -> Result<Folder, FolderLookupError>;
}

#[async_trait]
impl<T: FolderLookup + ?Sized> FolderLookup for std::sync::Arc<T> {
    async fn list_all_folders(&self) -> Result<Vec<Folder>, FolderLookupError> {
        (**self).list_all_folders().await
    }

    async fn get_folder_by_id(&self, id: &str) -> Result<Folder, FolderLookupError> {
        (**self).get_folder_by_id(id).await
    }
}
