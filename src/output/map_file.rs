//! Map file naming and writing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::tree::FolderNode;

use super::tree::TreeFormatter;

/// Output file name for a mapped root: `(MAP) <root-name>.txt`.
pub fn map_file_name(root: &Path) -> String {
    let base = root
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    format!("(MAP) {base}.txt")
}

/// Default destination for map files: the user's Downloads directory,
/// falling back to `<home>/Downloads` when the platform does not report one.
pub fn default_output_dir() -> io::Result<PathBuf> {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not locate a Downloads directory",
            )
        })
}

/// Render `tree` in buffered mode and write it, UTF-8, into `out_dir`.
/// Returns the full path of the written file.
pub fn write_map_file(tree: &FolderNode, out_dir: &Path) -> io::Result<PathBuf> {
    let formatter = TreeFormatter::new(false);
    let output_path = out_dir.join(map_file_name(&tree.path));
    fs::write(&output_path, formatter.format(tree))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::TreeBuilder;

    #[test]
    fn test_map_file_name() {
        assert_eq!(map_file_name(Path::new("/tmp/photos")), "(MAP) photos.txt");
        assert_eq!(
            map_file_name(Path::new("relative/music")),
            "(MAP) music.txt"
        );
    }

    #[test]
    fn test_write_map_file_content() {
        let fixture = TestTree::new();
        let root = fixture.add_dir("album");
        fixture.add_file("album/cover.png", "p");

        let tree = TreeBuilder::new().build(&root).unwrap();
        let out = TestTree::new();
        let written = write_map_file(&tree, out.path()).unwrap();

        assert_eq!(written.file_name().unwrap(), "(MAP) album.txt");
        let content = fs::read_to_string(&written).unwrap();
        assert_eq!(content, "album (1 file)\n");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let fixture = TestTree::new();
        let root = fixture.add_dir("r");
        let tree = TreeBuilder::new().build(&root).unwrap();

        let missing = fixture.path().join("no-such-dir");
        assert!(write_map_file(&tree, &missing).is_err());
    }
}
