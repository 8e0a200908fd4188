//! File System Types
//!
//! Core types for the virtual file system.

use std::collections::BTreeMap;
use thiserror::Error;

/// Children of a directory, kept ordered by name.
pub type Entries = BTreeMap<String, Node>;

/// File system errors.
///
/// The `Display` text is what the user sees after the command prefix,
/// e.g. `cd: notes.txt: Not a directory`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("already at root /")]
    AlreadyAtRoot,

    #[error("{name}: Directory not found")]
    DirectoryNotFound { name: String },

    #[error("{name}: Not a directory")]
    NotDirectory { name: String },

    #[error("{name}: Already exists")]
    AlreadyExists { name: String },

    #[error("{name}: File not found")]
    FileNotFound { name: String },

    #[error("{name}: Is a directory")]
    IsDirectory { name: String },

    #[error("cannot access current directory")]
    CurrentDirectoryUnavailable,
}

/// A node in the tree: a directory owning its children, or a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Entries),
    File(String),
}

impl Node {
    /// An empty directory.
    pub fn empty_dir() -> Self {
        Node::Directory(Entries::new())
    }

    /// A file holding `content`.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File(content.into())
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

/// The contents of a directory split by kind, each half sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

impl From<&Entries> for Listing {
    fn from(entries: &Entries) -> Self {
        let mut listing = Listing::default();
        // BTreeMap iteration is already in name order.
        for (name, node) in entries {
            match node {
                Node::Directory(_) => listing.directories.push(name.clone()),
                Node::File(_) => listing.files.push(name.clone()),
            }
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FsError::AlreadyAtRoot.to_string(), "already at root /");
        assert_eq!(
            FsError::DirectoryNotFound { name: "foo".into() }.to_string(),
            "foo: Directory not found"
        );
        assert_eq!(
            FsError::IsDirectory { name: "tmp".into() }.to_string(),
            "tmp: Is a directory"
        );
    }

    #[test]
    fn test_listing_partitions_and_sorts() {
        let mut entries = Entries::new();
        entries.insert("zeta.txt".into(), Node::file(""));
        entries.insert("beta".into(), Node::empty_dir());
        entries.insert("alpha.txt".into(), Node::file("a"));
        entries.insert("Alpha".into(), Node::empty_dir());

        let listing = Listing::from(&entries);
        assert_eq!(listing.directories, vec!["Alpha", "beta"]);
        assert_eq!(listing.files, vec!["alpha.txt", "zeta.txt"]);
        assert!(!listing.is_empty());
    }

    #[test]
    fn test_empty_listing() {
        assert!(Listing::from(&Entries::new()).is_empty());
    }
}
