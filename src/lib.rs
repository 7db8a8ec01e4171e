//! Dirmap - renders a folder hierarchy as an indented text tree

pub mod input;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use input::{MAX_ATTEMPTS, clean_path_input, print_banner, prompt_for_directory};
pub use output::{TreeFormatter, default_output_dir, map_file_name, write_map_file};
pub use tree::{FolderNode, ProgressReport, TreeBuilder};
