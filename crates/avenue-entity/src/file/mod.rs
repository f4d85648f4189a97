//! File domain records.

pub mod model;
pub mod parse;

pub use model::{File, RenameFileRequest};
pub use parse::{parse_file, parse_file_with};
