//! Tree formatter for streaming and buffered output

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::FolderNode;

/// Formatter for rendered tree output.
///
/// `format` buffers the whole tree into one string for the map file;
/// `print` streams line by line to stdout for interactive display. Color
/// only ever decorates the streamed output, never the line content.
pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// One rendered line, without its terminator: the node's prefix, its
    /// name, and the pluralized direct-file count.
    pub fn format_line(node: &FolderNode) -> String {
        format!(
            "{}{} ({} file{})",
            node.prefix,
            node.name,
            node.file_count,
            plural_suffix(node.file_count)
        )
    }

    /// Buffered mode: the whole tree as one blob, every line
    /// newline-terminated, no header or trailing summary.
    pub fn format(&self, node: &FolderNode) -> String {
        let mut out = String::new();
        Self::format_node(node, &mut out);
        out
    }

    fn format_node(node: &FolderNode, out: &mut String) {
        out.push_str(&Self::format_line(node));
        out.push('\n');
        for child in &node.children {
            Self::format_node(child, out);
        }
    }

    /// Streaming mode: emit each line as it is visited.
    pub fn print(&self, node: &FolderNode) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_node(node, &mut stdout)
    }

    fn print_node(&self, node: &FolderNode, stdout: &mut StandardStream) -> io::Result<()> {
        write!(stdout, "{}", node.prefix)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{}", node.name)?;
        stdout.reset()?;
        writeln!(
            stdout,
            " ({} file{})",
            node.file_count,
            plural_suffix(node.file_count)
        )?;
        for child in &node.children {
            self.print_node(child, stdout)?;
        }
        Ok(())
    }
}

fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
