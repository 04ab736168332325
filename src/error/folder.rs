//! Folder domain errors.
//!
//! These mirror the errors the backend reports for folder operations, plus
//! the checks the client makes before sending a request.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FolderError {
    /// The folder id does not resolve.
    NotFound { folder_id: String },

    /// A folder was asked to become its own parent.
    CannotBeOwnParent { folder_id: String },

    /// The move would put a folder inside its own subtree.
    CyclicReference {
        folder_id: String,
        target_id: String,
    },

    /// The target is not among the allowed move destinations.
    InvalidMoveTarget { target_id: String },

    /// Folder names must not be blank.
    InvalidName { name: String },
}

impl FolderError {
    pub fn user_message(&self) -> String {
        match self {
            FolderError::NotFound { folder_id } => format!("Folder '{}' was not found.", folder_id),
            FolderError::CannotBeOwnParent { .. } => {
                "A folder cannot be moved into itself.".to_string()
            }
            FolderError::CyclicReference { .. } => {
                "A folder cannot be moved into one of its own subfolders.".to_string()
            }
            FolderError::InvalidMoveTarget { target_id } => {
                format!("'{}' is not a valid destination.", target_id)
            }
            FolderError::InvalidName { .. } => "Folder names cannot be empty.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FolderError::NotFound { .. } => "E_FOLDER_NOT_FOUND",
            FolderError::CannotBeOwnParent { .. } => "E_FOLDER_SELF_PARENT",
            FolderError::CyclicReference { .. } => "E_FOLDER_CYCLE",
            FolderError::InvalidMoveTarget { .. } => "E_FOLDER_TARGET",
            FolderError::InvalidName { .. } => "E_FOLDER_NAME",
        }
    }
}

impl fmt::Display for FolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderError::NotFound { folder_id } => write!(f, "folder not found: {}", folder_id),
            FolderError::CannotBeOwnParent { folder_id } => {
                write!(f, "folder {} cannot be its own parent", folder_id)
            }
            FolderError::CyclicReference {
                folder_id,
                target_id,
            } => write!(
                f,
                "moving {} under {} would make it its own ancestor",
                folder_id, target_id
            ),
            FolderError::InvalidMoveTarget { target_id } => {
                write!(f, "invalid move target: {}", target_id)
            }
            FolderError::InvalidName { name } => write!(f, "invalid folder name: {:?}", name),
        }
    }
}

impl std::error::Error for FolderError {}
