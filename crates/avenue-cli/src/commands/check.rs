//! Record validation command.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use avenue_core::config::ContractConfig;
use avenue_core::error::AppError;
use avenue_entity::contents::parse_folder_contents_with;
use avenue_entity::file::parse_file_with;
use avenue_entity::folder::parse_folder_with;
use avenue_entity::user::parse_user_with;
use avenue_entity::{FolderContents, to_wire};

/// Record shapes the CLI can check
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    User,
    Folder,
    File,
    Contents,
}

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Record shape expected in the document
    #[arg(value_enum)]
    pub kind: RecordKind,
    /// JSON document holding one record or an array of records
    pub path: PathBuf,
}

/// One checked record
#[derive(Debug, Serialize, Tabled)]
struct RecordRow {
    /// Position in the document
    index: usize,
    /// Record id
    id: String,
    /// Short description
    summary: String,
}

/// Execute the check command
pub async fn execute(
    args: &CheckArgs,
    config: &ContractConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let raw = super::read_json(&args.path).await?;

    let mut canonical: Vec<Value> = Vec::new();
    let mut rows = Vec::new();
    for (index, item) in super::records(&raw) {
        let (wire, id, summary) = check_one(args.kind, item, config).map_err(|e| match index {
            Some(i) => locate(e, i),
            None => e,
        })?;
        rows.push(RecordRow {
            index: index.unwrap_or(0),
            id,
            summary,
        });
        canonical.push(wire);
    }

    tracing::info!(kind = ?args.kind, count = canonical.len(), "Documents conform to the contract");

    match format {
        OutputFormat::Json => {
            if raw.is_array() {
                output::print_json(&canonical);
            } else if let Some(single) = canonical.first() {
                output::print_json(single);
            }
        }
        OutputFormat::Table => {
            output::print_list(&rows, format);
            output::print_success(&format!("{} record(s) valid", rows.len()));
        }
    }
    Ok(())
}

fn check_one(
    kind: RecordKind,
    item: &Value,
    config: &ContractConfig,
) -> Result<(Value, String, String), AppError> {
    match kind {
        RecordKind::User => {
            let user = parse_user_with(item, config)?;
            let summary = format!(
                "{} <{}>{}",
                user.display_name(),
                user.email,
                if user.is_deleted() { " (deleted)" } else { "" }
            );
            Ok((to_wire(&user)?, user.id.to_string(), summary))
        }
        RecordKind::Folder => {
            let folder = parse_folder_with(item, config)?;
            let summary = match &folder.parent {
                Some(parent) => format!("{} (in {})", folder.name, parent),
                None => format!("{} (root)", folder.name),
            };
            Ok((to_wire(&folder)?, folder.folder_id.to_string(), summary))
        }
        RecordKind::File => {
            let file = parse_file_with(item, config)?;
            let summary = format!("{} ({} bytes)", file.file_name(), file.file_size);
            Ok((to_wire(&file)?, file.id.to_string(), summary))
        }
        RecordKind::Contents => {
            let contents = parse_folder_contents_with(item, config)?;
            let (id, summary) = contents_summary(&contents);
            Ok((to_wire(&contents)?, id, summary))
        }
    }
}

fn contents_summary(contents: &FolderContents) -> (String, String) {
    let id = contents
        .current()
        .map(|b| b.folder_id.to_string())
        .unwrap_or_else(|| "/".to_string());
    let summary = format!(
        "{} folder(s), {} file(s), {} bytes",
        contents.folders.len(),
        contents.files.len(),
        contents.total_file_size()
    );
    (id, summary)
}

/// Prefix a validation failure with the array position of the record.
fn locate(err: AppError, index: usize) -> AppError {
    match err.as_validation() {
        Some(violation) => violation.clone().within(&format!("[{index}]")).into(),
        None => err,
    }
}
