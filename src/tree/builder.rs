//! TreeBuilder - recursive depth-first construction of the folder tree

use std::fs;
use std::io;
use std::path::Path;

use super::filter::counts_as_file;
use super::node::FolderNode;

/// Branch glyph for a non-last child.
const TEE: &str = "├─ ";
/// Branch glyph for the last child.
const CORNER: &str = "└─ ";
/// Continuation segment below a non-last ancestor.
const PIPE: &str = "│  ";
/// Continuation segment below a last ancestor.
const BLANK: &str = "   ";

/// A progress notice is emitted every this many constructed nodes.
const PROGRESS_INTERVAL: u64 = 50;

/// Callback for periodic progress notices during a build.
pub trait ProgressReport {
    fn scanning(&mut self, path: &Path);
}

/// Builds a `FolderNode` tree with a single depth-first pass.
///
/// The node counter is builder state rather than anything process-wide, so
/// independent builds never observe each other's numbering.
pub struct TreeBuilder<'a> {
    sequence: u64,
    progress: Option<&'a mut dyn ProgressReport>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new() -> Self {
        Self {
            sequence: 0,
            progress: None,
        }
    }

    /// Attach a progress reporter that is notified every 50th scanned folder.
    pub fn with_progress(mut self, progress: &'a mut dyn ProgressReport) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Build the tree rooted at `root`.
    ///
    /// The caller guarantees `root` exists and is a directory; subdirectories
    /// reached by recursion were discovered by listing and are valid by
    /// construction. A listing failure anywhere aborts the whole build.
    pub fn build(&mut self, root: &Path) -> io::Result<FolderNode> {
        self.build_dir(root, "", None)
    }

    /// `segments` is the continuation prefix contributed by every ancestor:
    /// a pipe segment for a non-last ancestor, a blank one for a last
    /// ancestor, and always a blank one for the root, which has no siblings.
    /// `is_last` is `None` for the root, which keeps its own prefix empty.
    fn build_dir(
        &mut self,
        path: &Path,
        segments: &str,
        is_last: Option<bool>,
    ) -> io::Result<FolderNode> {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let prefix = match is_last {
            None => String::new(),
            Some(true) => format!("{segments}{CORNER}"),
            Some(false) => format!("{segments}{TEE}"),
        };

        let mut subdirs = Vec::new();
        let mut file_count = 0;
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            if entry_path.is_dir() {
                subdirs.push(entry_path);
            } else if entry_path.is_file() {
                let entry_name = entry.file_name();
                if counts_as_file(&entry_name.to_string_lossy()) {
                    file_count += 1;
                }
            }
        }
        subdirs.sort();

        self.sequence += 1;
        let sequence = self.sequence;
        if sequence % PROGRESS_INTERVAL == 0 {
            if let Some(progress) = self.progress.as_mut() {
                progress.scanning(path);
            }
        }

        let child_segments = match is_last {
            // The root contributes a blank segment like any last child,
            // indenting the whole tree one level under the root line
            None => BLANK.to_string(),
            Some(true) => format!("{segments}{BLANK}"),
            Some(false) => format!("{segments}{PIPE}"),
        };

        let mut children = Vec::with_capacity(subdirs.len());
        let total = subdirs.len();
        for (index, subdir) in subdirs.iter().enumerate() {
            let last = index + 1 == total;
            children.push(self.build_dir(subdir, &child_segments, Some(last))?);
        }

        Ok(FolderNode {
            path: path.to_path_buf(),
            name,
            prefix,
            file_count,
            children,
            sequence,
        })
    }
}

impl Default for TreeBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use std::path::PathBuf;

    fn build(root: &Path) -> FolderNode {
        TreeBuilder::new().build(root).expect("build should succeed")
    }

    #[test]
    fn test_single_directory() {
        let fixture = TestTree::new();
        fixture.add_file("a.txt", "a");
        fixture.add_file("b.txt", "b");

        let tree = build(fixture.path());
        assert_eq!(tree.file_count, 2);
        assert!(tree.children.is_empty());
        assert_eq!(tree.prefix, "");
        assert_eq!(tree.sequence, 1);
    }

    #[test]
    fn test_excluded_names_not_counted() {
        let fixture = TestTree::new();
        fixture.add_file("keep.txt", "x");
        fixture.add_file("~lock.tmp", "x");
        fixture.add_file("Thumbs.db", "x");
        fixture.add_file(".hidden", "x");

        let tree = build(fixture.path());
        // keep.txt and .hidden count, the other two are filtered by name
        assert_eq!(tree.file_count, 2);
    }

    #[test]
    fn test_subdirectories_not_counted_as_files() {
        let fixture = TestTree::new();
        fixture.add_file("file.txt", "x");
        fixture.add_dir("sub");

        let tree = build(fixture.path());
        assert_eq!(tree.file_count, 1);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "sub");
    }

    #[test]
    fn test_children_sorted_by_name() {
        let fixture = TestTree::new();
        fixture.add_dir("zebra");
        fixture.add_dir("apple");
        fixture.add_dir("mango");

        let tree = build(fixture.path());
        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_prefixes_for_two_children() {
        let fixture = TestTree::new();
        fixture.add_dir("a/inner");
        fixture.add_dir("b/inner");

        let tree = build(fixture.path());
        let a = &tree.children[0];
        let b = &tree.children[1];
        assert_eq!(a.prefix, "   ├─ ");
        assert_eq!(b.prefix, "   └─ ");
        // A grandchild under a non-last child gets a pipe continuation,
        // under the last child a blank one.
        assert_eq!(a.children[0].prefix, "   │  └─ ");
        assert_eq!(b.children[0].prefix, "      └─ ");
    }

    #[test]
    fn test_root_children_get_blank_continuation() {
        // The root's empty prefix never ends in a tee, so its children sit
        // behind a blank segment and never inherit a pipe from the root.
        let fixture = TestTree::new();
        fixture.add_dir("only/nested");

        let tree = build(fixture.path());
        assert_eq!(tree.children[0].prefix, "   └─ ");
        assert_eq!(tree.children[0].children[0].prefix, "      └─ ");
    }

    #[test]
    fn test_deep_pipe_continuation() {
        let fixture = TestTree::new();
        fixture.add_dir("a/x/deep");
        fixture.add_dir("b");

        let tree = build(fixture.path());
        let a = &tree.children[0];
        let x = &a.children[0];
        let deep = &x.children[0];
        assert_eq!(a.prefix, "   ├─ ");
        assert_eq!(x.prefix, "   │  └─ ");
        assert_eq!(deep.prefix, "   │     └─ ");
    }

    #[test]
    fn test_sequence_numbers_are_preorder() {
        let fixture = TestTree::new();
        fixture.add_dir("a/a1");
        fixture.add_dir("a/a2");
        fixture.add_dir("b");

        let tree = build(fixture.path());
        assert_eq!(tree.sequence, 1);
        let a = &tree.children[0];
        assert_eq!(a.sequence, 2);
        assert_eq!(a.children[0].sequence, 3);
        assert_eq!(a.children[1].sequence, 4);
        assert_eq!(tree.children[1].sequence, 5);
    }

    #[test]
    fn test_sequence_resets_per_builder() {
        let fixture = TestTree::new();
        fixture.add_dir("sub");

        let first = TreeBuilder::new().build(fixture.path()).unwrap();
        let second = TreeBuilder::new().build(fixture.path()).unwrap();
        assert_eq!(first.sequence, second.sequence);
    }

    #[test]
    fn test_progress_reported_every_fifty_nodes() {
        struct Recorder(Vec<PathBuf>);
        impl ProgressReport for Recorder {
            fn scanning(&mut self, path: &Path) {
                self.0.push(path.to_path_buf());
            }
        }

        let fixture = TestTree::new();
        // Root plus 119 subdirectories: nodes 50 and 100 trigger notices
        for i in 0..119 {
            fixture.add_dir(&format!("d{i:03}"));
        }

        let mut recorder = Recorder(Vec::new());
        TreeBuilder::new()
            .with_progress(&mut recorder)
            .build(fixture.path())
            .unwrap();
        assert_eq!(recorder.0.len(), 2);
    }

    #[test]
    fn test_dir_count_matches_structure() {
        let fixture = TestTree::new();
        fixture.add_dir("a/a1");
        fixture.add_dir("b");
        fixture.add_file("loose.txt", "x");

        let tree = build(fixture.path());
        assert_eq!(tree.dir_count(), 4);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let fixture = TestTree::new();
        let missing = fixture.path().join("nope");
        assert!(TreeBuilder::new().build(&missing).is_err());
    }
}
