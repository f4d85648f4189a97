//! Folder forest validation, ancestry, and listings.

use std::collections::HashMap;

use avenue_core::ValidationError;
use avenue_core::types::{FolderId, UserId};

use super::model::{Breadcrumb, Folder, ROOT_FOLDER_ID};
use crate::contents::{FolderContents, compose_folder_contents};
use crate::file::File;

/// A set of folders whose parent links are known to form a forest.
///
/// Construction fails on duplicate ids, on parents that are not part of the
/// set, and on cycles. Once built, every parent walk reaches a root in at
/// most `len()` steps.
#[derive(Debug, Clone)]
pub struct FolderForest<'a> {
    folders: &'a [Folder],
    index: HashMap<&'a FolderId, usize>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    Active,
    Done,
}

impl<'a> FolderForest<'a> {
    /// Validate `folders` and index them by id.
    pub fn new(folders: &'a [Folder]) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(folders.len());
        for (i, folder) in folders.iter().enumerate() {
            if index.insert(&folder.folder_id, i).is_some() {
                return Err(ValidationError::new(
                    format!("folders[{i}].folder_id"),
                    format!("duplicate folder id '{}'", folder.folder_id),
                ));
            }
        }

        for (i, folder) in folders.iter().enumerate() {
            if let Some(parent) = &folder.parent {
                if !index.contains_key(parent) {
                    return Err(ValidationError::new(
                        format!("folders[{i}].parent"),
                        format!("parent '{parent}' is not in the folder set"),
                    ));
                }
            }
        }

        let forest = Self { folders, index };
        forest.check_acyclic()?;
        Ok(forest)
    }

    fn check_acyclic(&self) -> Result<(), ValidationError> {
        let mut state = vec![Visit::Pending; self.folders.len()];
        let mut path = Vec::new();

        for start in 0..self.folders.len() {
            let mut current = start;
            loop {
                match state[current] {
                    Visit::Done => break,
                    Visit::Active => {
                        return Err(ValidationError::new(
                            format!("folders[{start}].parent"),
                            format!(
                                "parent chain of '{}' loops back to '{}'",
                                self.folders[start].folder_id, self.folders[current].folder_id
                            ),
                        ));
                    }
                    Visit::Pending => {
                        state[current] = Visit::Active;
                        path.push(current);
                        match self.parent_index(current) {
                            Some(parent) => current = parent,
                            None => break,
                        }
                    }
                }
            }
            for visited in path.drain(..) {
                state[visited] = Visit::Done;
            }
        }
        Ok(())
    }

    fn parent_index(&self, i: usize) -> Option<usize> {
        self.folders[i]
            .parent
            .as_ref()
            .and_then(|parent| self.index.get(parent).copied())
    }

    fn position(&self, id: &FolderId) -> Result<usize, ValidationError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ValidationError::new("folder_id", format!("unknown folder '{id}'")))
    }

    /// Number of folders in the forest.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if the forest holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Look up a folder by id.
    pub fn get(&self, id: &FolderId) -> Option<&'a Folder> {
        self.index.get(id).map(|&i| &self.folders[i])
    }

    /// Root folders, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &'a Folder> + use<'a> {
        let folders: &'a [Folder] = self.folders;
        folders.iter().filter(|f| f.is_root())
    }

    /// Immediate children of `parent` (roots when `None`), in input order.
    pub fn children(&self, parent: Option<&FolderId>) -> Vec<&'a Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent.as_ref() == parent)
            .collect()
    }

    /// The chain from the root down to `id`, inclusive.
    pub fn ancestors(&self, id: &FolderId) -> Result<Vec<&'a Folder>, ValidationError> {
        let mut chain = Vec::new();
        let mut current = Some(self.position(id)?);
        while let Some(i) = current {
            chain.push(&self.folders[i]);
            current = self.parent_index(i);
        }
        chain.reverse();
        Ok(chain)
    }

    /// Distance from the root; root folders have depth 0.
    pub fn depth(&self, id: &FolderId) -> Result<usize, ValidationError> {
        Ok(self.ancestors(id)?.len() - 1)
    }

    /// Breadcrumb trail for `id`, root first and ending at `id` itself.
    pub fn breadcrumbs(&self, id: &FolderId) -> Result<Vec<Breadcrumb>, ValidationError> {
        Ok(self
            .ancestors(id)?
            .into_iter()
            .map(Folder::breadcrumb)
            .collect())
    }

    /// Check that re-parenting `folder` under `new_parent` keeps the forest.
    pub fn check_move(
        &self,
        folder: &FolderId,
        new_parent: Option<&FolderId>,
    ) -> Result<(), ValidationError> {
        self.position(folder)?;
        let Some(new_parent) = new_parent else {
            return Ok(());
        };
        let chain = self
            .ancestors(new_parent)
            .map_err(|e| ValidationError::new("parent", e.reason))?;
        if chain.iter().any(|f| &f.folder_id == folder) {
            return Err(ValidationError::new(
                "parent",
                format!("moving '{folder}' under '{new_parent}' would create a cycle"),
            ));
        }
        Ok(())
    }

    /// List the immediate contents of `folder`.
    ///
    /// `None` or [`ROOT_FOLDER_ID`] selects the top level, which has no
    /// breadcrumbs. Files are matched on their `parent` member; their input
    /// order is kept.
    pub fn list_contents(
        &self,
        folder: Option<&FolderId>,
        files: &[File],
    ) -> Result<FolderContents, ValidationError> {
        let folder = folder.filter(|id| id.as_str() != ROOT_FOLDER_ID);
        let breadcrumbs = match folder {
            Some(id) => self.breadcrumbs(id)?,
            None => Vec::new(),
        };

        let folders = self.children(folder).into_iter().cloned().collect();
        let files = files
            .iter()
            .filter(|f| f.parent.as_ref() == folder)
            .cloned()
            .collect();

        Ok(compose_folder_contents(folders, files, breadcrumbs))
    }
}

/// Check that every folder belongs to `owner`.
pub fn check_owner(folders: &[Folder], owner: UserId) -> Result<(), ValidationError> {
    match folders.iter().position(|f| f.owner_id != owner) {
        Some(i) => Err(ValidationError::new(
            format!("folders[{i}].owner_id"),
            format!("folder is owned by {}, expected {owner}", folders[i].owner_id),
        )),
        None => Ok(()),
    }
}
