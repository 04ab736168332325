//! Folder records and the wire types of the folder API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A folder as returned by the MediaHub API.
///
/// `parent_id` of `None` marks a top-level folder. The API omits the key for
/// roots, older clients sent `null`, and an empty string is treated the same
/// way since neither can name a real folder.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "deserialize_parent_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Materialized path. Informational only, never used for linking.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

impl Folder {
    /// Create a folder stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            parent_id: parent_id.filter(|p| !p.is_empty()).map(str::to_string),
            created_at: now,
            updated_at: now,
            path: String::new(),
        }
    }

    /// True when the folder has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_ref().is_none()
    }

    /// The parent id, with empty strings read as "no parent".
    pub fn parent_ref(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }
}

fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|p| !p.is_empty()))
}

/// A folder with its computed subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderNode {
    #[serde(flatten)]
    pub folder: Folder,
    pub children: Vec<FolderNode>,
    /// 0 for roots, parent depth + 1 otherwise.
    pub depth: usize,
}

impl FolderNode {
    pub fn new(folder: Folder, depth: usize) -> Self {
        Self {
            folder,
            children: Vec::new(),
            depth,
        }
    }

    pub fn id(&self) -> &str {
        &self.folder.id
    }

    pub fn name(&self) -> &str {
        &self.folder.name
    }

    /// Pre-order walk over this node and all of its descendants.
    pub fn iter(&self) -> FolderNodeIter<'_> {
        FolderNodeIter { stack: vec![self] }
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.iter().count() - 1
    }

    /// Find a node in this subtree by folder id.
    pub fn find(&self, id: &str) -> Option<&FolderNode> {
        self.iter().find(|node| node.id() == id)
    }
}

/// Depth-first, pre-order iterator over a [`FolderNode`] subtree.
pub struct FolderNodeIter<'a> {
    stack: Vec<&'a FolderNode>,
}

impl<'a> Iterator for FolderNodeIter<'a> {
    type Item = &'a FolderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the first child is visited first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Response from `GET /folders`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FoldersListResponse {
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub folders: Vec<Folder>,
}

/// Response from `GET /folders/{id}/path`, root first.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolderPathResponse {
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub path: Vec<Folder>,
}

/// Response from `GET /folders/{id}/contents`.
///
/// Assets are passed through untouched; this crate only reasons about folders.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderContents {
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub assets: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_null_vec")]
    pub sub_folders: Vec<Folder>,
}

/// Body of `POST /folders`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub parent_id: Option<String>,
}

impl FolderCreateRequest {
    pub fn new(name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parent_id: parent_id.map(str::to_string),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Body of `PUT /folders/{id}`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl FolderUpdateRequest {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Re-parent a folder. `None` moves it to the top level, which the
    /// backend expects as an empty parent id.
    pub fn reparent(target_folder_id: Option<&str>) -> Self {
        Self {
            parent_id: Some(target_folder_id.unwrap_or_default().to_string()),
            ..Self::default()
        }
    }
}

/// Request to move a folder under another folder (`None` = top level).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveFolderRequest {
    pub folder_id: String,
    pub target_folder_id: Option<String>,
}

/// Request to move an asset into a folder (`None` = top level).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveAssetRequest {
    pub asset_id: String,
    pub target_folder_id: Option<String>,
}

/// Generic `{ status, message }` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

fn deserialize_null_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
