//! Move dialog state.

use crate::error::FolderError;
use crate::hierarchy::{build_hierarchy, move_targets, MoveSubject};
use crate::models::{Folder, FolderNode, MoveAssetRequest, MoveFolderRequest};

/// The request a confirmed move turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveRequest {
    Folder(MoveFolderRequest),
    Asset(MoveAssetRequest),
}

/// Destinations offered when moving a folder or an asset.
///
/// `available` is the flat list used to validate a choice, `hierarchy` the
/// same folders as a tree for display. The top level is always a valid
/// destination.
#[derive(Debug, Clone)]
pub struct MovePickerState {
    pub subject: MoveSubject,
    pub available: Vec<Folder>,
    pub hierarchy: Vec<FolderNode>,
    /// Confirmed target; `Some(None)` means the top level
    selected: Option<Option<String>>,
}

impl MovePickerState {
    pub fn new(folders: &[Folder], subject: MoveSubject, current_folder_id: Option<&str>) -> Self {
        let available = move_targets(folders, &subject, current_folder_id);
        let hierarchy = build_hierarchy(&available);
        tracing::debug!(
            subject = subject.id(),
            offered = available.len(),
            total = folders.len(),
            "move targets computed"
        );
        Self {
            subject,
            available,
            hierarchy,
            selected: None,
        }
    }

    pub fn is_available(&self, folder_id: &str) -> bool {
        self.available.iter().any(|f| f.id == folder_id)
    }

    pub fn selected(&self) -> Option<Option<&str>> {
        self.selected.as_ref().map(|s| s.as_deref())
    }

    /// Choose a destination (`None` for the top level) and build the request.
    pub fn select(&mut self, target: Option<&str>) -> Result<MoveRequest, FolderError> {
        let target = target.filter(|t| !t.is_empty());
        if let Some(id) = target {
            if let MoveSubject::Folder(subject_id) = &self.subject {
                if id == subject_id {
                    return Err(FolderError::CannotBeOwnParent {
                        folder_id: subject_id.clone(),
                    });
                }
            }
            if !self.is_available(id) {
                return Err(FolderError::InvalidMoveTarget {
                    target_id: id.to_string(),
                });
            }
        }

        let target_folder_id = target.map(str::to_string);
        self.selected = Some(target_folder_id.clone());

        Ok(match &self.subject {
            MoveSubject::Folder(id) => MoveRequest::Folder(MoveFolderRequest {
                folder_id: id.clone(),
                target_folder_id,
            }),
            MoveSubject::Asset(id) => MoveRequest::Asset(MoveAssetRequest {
                asset_id: id.clone(),
                target_folder_id,
            }),
        })
    }
}
