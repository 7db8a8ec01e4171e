//! Output rendering and persistence
//!
//! Two consumption modes for a built tree: a streaming print for interactive
//! display and a buffered blob for the map file. Both visit nodes in the
//! same pre-order and agree byte-for-byte on uncolored line content.

mod map_file;
mod tree;

pub use map_file::{default_output_dir, map_file_name, write_map_file};
pub use tree::TreeFormatter;
