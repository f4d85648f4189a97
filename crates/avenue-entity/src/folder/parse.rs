//! Parsing raw wire data into folder and breadcrumb records.

use serde_json::Value;

use avenue_core::ValidationError;
use avenue_core::config::ContractConfig;
use avenue_core::types::FolderId;

use super::model::{Breadcrumb, Folder};
use crate::wire::Fields;

/// Parse a folder record under the default contract policy.
///
/// Fails if `folder_id` or `owner_id` is missing. Acyclicity of the parent
/// relation needs the whole folder set and is checked by
/// [`FolderForest`](super::FolderForest), not here.
pub fn parse_folder(raw: &Value) -> Result<Folder, ValidationError> {
    parse_folder_with(raw, &ContractConfig::default())
}

/// Parse a folder record under the given contract policy.
pub fn parse_folder_with(raw: &Value, config: &ContractConfig) -> Result<Folder, ValidationError> {
    let fields = Fields::of(raw)?;

    let folder = Folder {
        folder_id: required_id(&fields, "folder_id")?,
        name: fields.required_str("name")?.to_string(),
        parent: parent_ref(&fields, "parent", config.normalize_empty_parent)?,
        owner_id: fields.required_user_id("owner_id")?,
    };

    tracing::debug!(folder_id = %folder.folder_id, "Parsed folder record");
    Ok(folder)
}

/// Parse a breadcrumb record.
pub fn parse_breadcrumb(raw: &Value) -> Result<Breadcrumb, ValidationError> {
    let fields = Fields::of(raw)?;
    Ok(Breadcrumb {
        folder_id: required_id(&fields, "folder_id")?,
        label: fields.required_str("label")?.to_string(),
    })
}

impl TryFrom<Value> for Folder {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        parse_folder(&raw)
    }
}

impl TryFrom<Value> for Breadcrumb {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        parse_breadcrumb(&raw)
    }
}

pub(crate) fn required_id<T>(fields: &Fields<'_>, name: &str) -> Result<T, ValidationError>
where
    T: TryFrom<String, Error = ValidationError>,
{
    T::try_from(fields.required_str(name)?.to_string())
        .map_err(|e| ValidationError::new(name, e.reason))
}

/// A nullable folder reference. Older producers write `""` for root.
pub(crate) fn parent_ref(
    fields: &Fields<'_>,
    name: &str,
    normalize_empty: bool,
) -> Result<Option<FolderId>, ValidationError> {
    match fields.optional_str(name)? {
        None => Ok(None),
        Some(s) if s.is_empty() && normalize_empty => Ok(None),
        Some(s) => FolderId::try_from(s.to_string())
            .map(Some)
            .map_err(|e| ValidationError::new(name, e.reason)),
    }
}
