//! File System Module
//!
//! The in-memory tree the shell operates on. Nothing here touches real storage;
//! the whole tree is dropped when the process exits.

pub mod types;
pub mod in_memory_fs;

pub use types::*;
pub use in_memory_fs::VirtualFs;
