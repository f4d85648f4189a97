//! Parsing raw wire data into [`File`] records.

use serde_json::Value;

use avenue_core::ValidationError;
use avenue_core::config::ContractConfig;

use super::model::File;
use crate::folder::parse::{parent_ref, required_id};
use crate::wire::Fields;

/// Parse a file record under the default contract policy.
pub fn parse_file(raw: &Value) -> Result<File, ValidationError> {
    parse_file_with(raw, &ContractConfig::default())
}

/// Parse a file record under the given contract policy.
///
/// `file_size` must not be negative nor exceed `config.max_file_size`.
/// `parent` and `delete_time` may be null. A `delete_time` of
/// `0001-01-01T00:00:00Z` marks a live file and is read as `None`.
pub fn parse_file_with(raw: &Value, config: &ContractConfig) -> Result<File, ValidationError> {
    let fields = Fields::of(raw)?;

    let file_size = fields.required_bytes("file_size")?;
    if file_size > config.max_file_size {
        return Err(ValidationError::new(
            "file_size",
            format!(
                "{file_size} bytes exceeds the limit of {} bytes",
                config.max_file_size
            ),
        ));
    }

    let file = File {
        id: required_id(&fields, "id")?,
        name: fields.required_str("name")?.to_string(),
        extension: fields.required_str("extension")?.to_string(),
        file_size,
        parent: parent_ref(&fields, "parent", config.normalize_empty_parent)?,
        created_at: fields.required_timestamp("created_at")?,
        delete_time: fields
            .optional_timestamp("delete_time")?
            .filter(|t| !t.is_zero()),
    };

    tracing::debug!(file_id = %file.id, size = file.file_size, "Parsed file record");
    Ok(file)
}

impl TryFrom<Value> for File {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        parse_file(&raw)
    }
}
