//! # avenue-entity
//!
//! The Avenue data contract. Every struct in this crate is a record shape
//! exchanged between the web client and the backend, or a value object
//! derived from one. Records derive `Serialize`/`Deserialize` with their
//! exact wire names; the `parse_*` functions are the validating entry
//! point for untyped wire data and report failures as
//! [`ValidationError`](avenue_core::ValidationError).
//!
//! Nothing here performs I/O or holds shared state.

pub mod contents;
pub mod file;
pub mod folder;
pub mod loadable;
pub mod request;
pub mod storage;
pub mod user;
pub mod wire;

pub use contents::{FolderContents, compose_folder_contents, parse_folder_contents};
pub use file::{File, parse_file};
pub use folder::{Breadcrumb, Folder, FolderForest, parse_breadcrumb, parse_folder};
pub use loadable::{LoadState, LoadableData, wrap, wrap_error, wrap_loading};
pub use request::validate_request;
pub use user::{User, parse_user};
pub use wire::to_wire;
