//! FolderNode - one directory in the built tree

use std::path::PathBuf;

/// One directory in the built tree.
///
/// `prefix` is the exact run of indentation and connector characters the
/// node's rendered line starts with. It is computed once during construction
/// from the ancestry and sibling position and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FolderNode {
    pub path: PathBuf,
    pub name: String,
    pub prefix: String,
    /// Regular files directly inside this directory that pass the name
    /// filter. Not recursive.
    pub file_count: usize,
    /// Immediate subdirectories, in sorted listing order.
    pub children: Vec<FolderNode>,
    /// Pre-order construction counter across the whole build. Drives
    /// progress notices only, never rendered output.
    pub sequence: u64,
}

impl FolderNode {
    /// Total number of directories in this subtree, the node itself included.
    pub fn dir_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderNode::dir_count)
            .sum::<usize>()
    }
}
