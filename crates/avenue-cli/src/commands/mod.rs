//! CLI command definitions and dispatch.

pub mod check;
pub mod tree;

use std::path::Path;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::output::OutputFormat;
use avenue_core::config::{AppConfig, ContractConfig};
use avenue_core::error::AppError;
use avenue_entity::folder::{Folder, parse_folder_with};

/// Avenue: validate documents against the file-storage data contract
#[derive(Debug, Parser)]
#[command(name = "avenue", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a record (or array of records) and print its canonical form
    Check(check::CheckArgs),
    /// Validate a folder set as a forest and print it
    Tree(tree::TreeArgs),
    /// Print the breadcrumb trail of one folder
    Breadcrumbs(tree::BreadcrumbsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Check(args) => check::execute(args, &config.contract, self.format).await,
            Commands::Tree(args) => tree::execute_tree(args, &config.contract, self.format).await,
            Commands::Breadcrumbs(args) => {
                tree::execute_breadcrumbs(args, &config.contract, self.format).await
            }
        }
    }
}

/// Helper: read and decode a JSON document
pub async fn read_json(path: &Path) -> Result<Value, AppError> {
    let text = tokio::fs::read_to_string(path).await?;
    let value = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), "Read JSON document");
    Ok(value)
}

/// Helper: the elements of a top-level array, or the document itself
pub fn records(raw: &Value) -> Vec<(Option<usize>, &Value)> {
    match raw {
        Value::Array(items) => items.iter().enumerate().map(|(i, v)| (Some(i), v)).collect(),
        other => vec![(None, other)],
    }
}

/// Helper: load a folder set from a JSON array
pub async fn load_folders(path: &Path, config: &ContractConfig) -> Result<Vec<Folder>, AppError> {
    let raw = read_json(path).await?;
    if !raw.is_array() {
        return Err(AppError::validation(format!(
            "{} must contain a JSON array of folders",
            path.display()
        )));
    }

    let mut folders = Vec::new();
    for (index, item) in records(&raw) {
        let folder = parse_folder_with(item, config).map_err(|e| match index {
            Some(i) => e.within(&format!("[{i}]")),
            None => e,
        })?;
        folders.push(folder);
    }
    Ok(folders)
}
