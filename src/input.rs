//! Interactive path prompting with a retry limit

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Attempts the user gets to enter a valid directory before the program
/// gives up without writing anything.
pub const MAX_ATTEMPTS: u32 = 3;

/// Strip surrounding whitespace plus single or double quotes, so paths
/// pasted from a file manager's "copy as path" validate cleanly.
pub fn clean_path_input(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|c| c == ' ' || c == '\'' || c == '"')
}

/// Startup banner and cancellation hint shown before the prompt loop.
pub fn print_banner(output: &mut impl Write) -> io::Result<()> {
    writeln!(
        output,
        "A simple program to display the contents of a file system visually.\n"
    )?;
    writeln!(output, "Press \"CTRL + C\" to cancel execution\n")?;
    Ok(())
}

/// Prompt loop: up to [`MAX_ATTEMPTS`] tries to read a valid directory path
/// from `input`. Returns `None` when every attempt fails or the stream ends.
pub fn prompt_for_directory(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<PathBuf>> {
    for _ in 0..MAX_ATTEMPTS {
        writeln!(output, "Enter a valid directory path, then press enter")?;
        write!(output, "eg., /home/user/Pictures: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed, nothing more to read
            break;
        }
        let cleaned = clean_path_input(&line);
        if Path::new(cleaned).is_dir() {
            return Ok(Some(PathBuf::from(cleaned)));
        }
        writeln!(output, "Invalid directory path. Please try again.")?;
    }
    Ok(None)
}
