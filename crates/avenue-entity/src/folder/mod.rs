//! Folder domain records.

pub mod model;
pub mod parse;
pub mod tree;

pub use model::{Breadcrumb, CreateFolderRequest, Folder, ROOT_FOLDER_ID};
pub use parse::{parse_breadcrumb, parse_folder, parse_folder_with};
pub use tree::{FolderForest, check_owner};
