//! Folder forest commands.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use avenue_core::config::ContractConfig;
use avenue_core::error::AppError;
use avenue_core::types::FolderId;
use avenue_entity::folder::{Folder, FolderForest};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// JSON array of folder records
    pub path: PathBuf,
}

/// Arguments for the breadcrumbs command
#[derive(Debug, Args)]
pub struct BreadcrumbsArgs {
    /// JSON array of folder records
    pub path: PathBuf,
    /// Folder whose trail to print
    pub folder_id: String,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Path built from ancestor names
    path: String,
    /// Depth
    depth: usize,
    /// Owner
    owner_id: i64,
}

/// Breadcrumb display row
#[derive(Debug, Serialize, Tabled)]
struct BreadcrumbRow {
    /// Depth
    depth: usize,
    /// Folder ID
    folder_id: String,
    /// Label
    label: String,
}

/// Execute the tree command
pub async fn execute_tree(
    args: &TreeArgs,
    config: &ContractConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let folders = super::load_folders(&args.path, config).await?;
    let forest = FolderForest::new(&folders)?;

    let mut rows = Vec::with_capacity(forest.len());
    for root in forest.roots() {
        collect_rows(&forest, root, &mut rows)?;
    }

    tracing::info!(folders = forest.len(), "Folder set is a forest");
    output::print_list(&rows, format);
    Ok(())
}

/// Depth-first, children in input order.
fn collect_rows(
    forest: &FolderForest<'_>,
    folder: &Folder,
    rows: &mut Vec<FolderRow>,
) -> Result<(), AppError> {
    let trail = forest.breadcrumbs(&folder.folder_id)?;
    let path = trail
        .iter()
        .map(|b| b.label.as_str())
        .collect::<Vec<_>>()
        .join("/");

    rows.push(FolderRow {
        id: folder.folder_id.to_string(),
        path: format!("/{path}"),
        depth: trail.len() - 1,
        owner_id: folder.owner_id.get(),
    });

    for child in forest.children(Some(&folder.folder_id)) {
        collect_rows(forest, child, rows)?;
    }
    Ok(())
}

/// Execute the breadcrumbs command
pub async fn execute_breadcrumbs(
    args: &BreadcrumbsArgs,
    config: &ContractConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let folders = super::load_folders(&args.path, config).await?;
    let forest = FolderForest::new(&folders)?;

    let id: FolderId = args.folder_id.parse()?;
    if forest.get(&id).is_none() {
        return Err(AppError::not_found(format!("Folder '{id}' not found")));
    }

    let rows: Vec<BreadcrumbRow> = forest
        .breadcrumbs(&id)?
        .into_iter()
        .enumerate()
        .map(|(depth, b)| BreadcrumbRow {
            depth,
            folder_id: b.folder_id.to_string(),
            label: b.label,
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
