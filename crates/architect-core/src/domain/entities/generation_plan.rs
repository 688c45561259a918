use std::collections::HashSet;

use crate::domain::{
    entities::common::RelativePath, error::DomainError, item::ItemKind, naming::NamingSet,
};

/// Everything one generation request will write, computed before any write
/// happens.
///
/// Entries are committed in order. Commit is not transactional: a failure
/// part-way leaves the earlier entries on disk.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub(crate) kind: ItemKind,
    pub(crate) names: NamingSet,
    pub(crate) target_dir: RelativePath,
    pub(crate) entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    pub fn new(kind: ItemKind, names: NamingSet, target_dir: RelativePath) -> Self {
        Self {
            kind,
            names,
            target_dir,
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.entries
            .push(PlanEntry::File(GeneratedArtifact { path, content }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(PlanEntry::Directory(path));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The naming set every path and template context was derived from.
    pub fn names(&self) -> &NamingSet {
        &self.names
    }

    pub fn target_dir(&self) -> &RelativePath {
        &self.target_dir
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum PlanEntry {
    File(GeneratedArtifact),
    Directory(RelativePath),
}

impl PlanEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => d,
        }
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: RelativePath,
    pub content: String,
}
