//! Directory tree building logic
//!
//! This module builds an in-memory tree of folder nodes with a single
//! depth-first pass. Each node carries a precomputed count of the regular
//! files directly inside it and the exact connector prefix its rendered
//! line starts with.

mod builder;
mod filter;
mod node;

// Re-export public types
pub use builder::{ProgressReport, TreeBuilder};
pub use filter::counts_as_file;
pub use node::FolderNode;
