//! Folder and breadcrumb records.

use serde::{Deserialize, Serialize};
use validator::Validate;

use avenue_core::ValidationError;
use avenue_core::types::{FolderId, UserId};

/// Id a client may send to ask for the top-level listing.
pub const ROOT_FOLDER_ID: &str = "c32af1cc-aba9-4878-a305-5006dc7a5b76";

/// A folder in a user's tree.
///
/// Decoding with serde goes through [`parse_folder`](super::parse_folder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Folder {
    /// Unique folder identifier.
    pub folder_id: FolderId,
    /// Display label, not unique within a parent.
    pub name: String,
    /// Parent folder (`None` for root folders).
    pub parent: Option<FolderId>,
    /// The owning user.
    pub owner_id: UserId,
}

impl Folder {
    /// Create a folder with a freshly minted id.
    pub fn new(name: impl Into<String>, parent: Option<FolderId>, owner_id: UserId) -> Self {
        Self {
            folder_id: FolderId::new(),
            name: name.into(),
            parent,
            owner_id,
        }
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Snapshot this folder's current name as a breadcrumb.
    pub fn breadcrumb(&self) -> Breadcrumb {
        Breadcrumb {
            folder_id: self.folder_id.clone(),
            label: self.name.clone(),
        }
    }
}

/// One step of the ancestor chain shown above a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Breadcrumb {
    pub folder_id: FolderId,
    /// Folder name at the time the breadcrumb was produced.
    pub label: String,
}

/// Request to create a folder for the calling user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder; absent or empty for a root folder.
    #[serde(default)]
    pub parent: Option<String>,
}

impl CreateFolderRequest {
    /// Build the folder record this request describes.
    pub fn into_folder(self, owner_id: UserId) -> Result<Folder, ValidationError> {
        let parent = self
            .parent
            .filter(|p| !p.trim().is_empty())
            .map(FolderId::try_from)
            .transpose()
            .map_err(|e| ValidationError::new("parent", e.reason))?;
        Ok(Folder::new(self.name, parent, owner_id))
    }
}
