//! The composed listing view of one folder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use avenue_core::ValidationError;
use avenue_core::config::ContractConfig;

use crate::file::{File, parse_file_with};
use crate::folder::{Breadcrumb, Folder, parse_breadcrumb, parse_folder_with};
use crate::wire::Fields;

/// Immediate child folders and files of one folder, plus its ancestor chain.
///
/// This is a derived view assembled by a listing collaborator, not a stored
/// record. Sequence order is whatever the producer supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FolderContents {
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
    /// Root first.
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl FolderContents {
    /// Check if the folder has neither child folders nor files.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    /// The listed folder itself, i.e. the last breadcrumb.
    pub fn current(&self) -> Option<&Breadcrumb> {
        self.breadcrumbs.last()
    }

    /// Total bytes of the listed files.
    pub fn total_file_size(&self) -> u64 {
        self.files.iter().map(|f| f.file_size).sum()
    }
}

/// Aggregate the three sequences without reordering or filtering them.
pub fn compose_folder_contents(
    folders: Vec<Folder>,
    files: Vec<File>,
    breadcrumbs: Vec<Breadcrumb>,
) -> FolderContents {
    FolderContents {
        folders,
        files,
        breadcrumbs,
    }
}

/// Parse a folder listing, validating every element.
///
/// Element errors carry an indexed path such as `files[2].file_size`.
pub fn parse_folder_contents(raw: &Value) -> Result<FolderContents, ValidationError> {
    parse_folder_contents_with(raw, &ContractConfig::default())
}

/// Parse a folder listing under the given contract policy.
pub fn parse_folder_contents_with(
    raw: &Value,
    config: &ContractConfig,
) -> Result<FolderContents, ValidationError> {
    let fields = Fields::of(raw)?;

    let folders = parse_each(&fields, "folders", |v| parse_folder_with(v, config))?;
    let files = parse_each(&fields, "files", |v| parse_file_with(v, config))?;
    let breadcrumbs = parse_each(&fields, "breadcrumbs", parse_breadcrumb)?;

    Ok(compose_folder_contents(folders, files, breadcrumbs))
}

impl TryFrom<Value> for FolderContents {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        parse_folder_contents(&raw)
    }
}

fn parse_each<T>(
    fields: &Fields<'_>,
    name: &str,
    parse: impl Fn(&Value) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    fields
        .required_array(name)?
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item).map_err(|e| e.within(&format!("{name}[{i}]"))))
        .collect()
}
