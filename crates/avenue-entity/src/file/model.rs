//! File record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use avenue_core::types::{FileId, FolderId, Timestamp};

/// A file stored in Avenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// Display name, without the extension.
    pub name: String,
    /// File-type suffix, stored on its own.
    pub extension: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Containing folder (`None` for files at the root).
    pub parent: Option<FolderId>,
    /// When the file was created.
    pub created_at: Timestamp,
    /// Scheduled or actual deletion time. `None` for live files.
    pub delete_time: Option<Timestamp>,
}

impl File {
    /// Check if the file has been soft deleted (or is scheduled to be).
    pub fn is_deleted(&self) -> bool {
        self.delete_time.is_some()
    }

    /// Check if deletion has taken effect at `now`.
    pub fn is_deleted_at(&self, now: DateTime<Utc>) -> bool {
        self.delete_time.as_ref().is_some_and(|t| t.instant() <= now)
    }

    /// Name and extension joined for downloads, e.g. `report.pdf`.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension.trim_start_matches('.'))
        }
    }
}

/// Request to rename a file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameFileRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::validate_request;
    use chrono::Duration;

    fn sample() -> File {
        File {
            id: "file-1".parse().unwrap(),
            name: "report".to_string(),
            extension: "pdf".to_string(),
            file_size: 2048,
            parent: None,
            created_at: Timestamp::now(),
            delete_time: None,
        }
    }

    #[test]
    fn test_file_name() {
        let mut file = sample();
        assert_eq!(file.file_name(), "report.pdf");
        file.extension = ".tar".to_string();
        assert_eq!(file.file_name(), "report.tar");
        file.extension.clear();
        assert_eq!(file.file_name(), "report");
    }

    #[test]
    fn test_scheduled_deletion() {
        let now = Utc::now();
        let mut file = sample();
        assert!(!file.is_deleted());
        file.delete_time = Some(Timestamp::from(now + Duration::days(1)));
        assert!(file.is_deleted());
        assert!(!file.is_deleted_at(now));
        assert!(file.is_deleted_at(now + Duration::days(2)));
    }

    #[test]
    fn test_rename_request_rejects_empty_name() {
        let req = RenameFileRequest { name: String::new() };
        assert_eq!(validate_request(&req).unwrap_err().field, "name");
    }
}
