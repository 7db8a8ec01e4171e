//! CLI entry point for dirmap

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use dirmap::{
    ProgressReport, TreeBuilder, TreeFormatter, clean_path_input, default_output_dir, print_banner,
    prompt_for_directory, write_map_file,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Dumb terminals get plain output
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Otherwise color only when streaming to a real terminal
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Maps a folder hierarchy to an indented text tree with per-folder file counts")]
#[command(version)]
struct Args {
    /// Directory to map; prompts interactively when omitted
    path: Option<PathBuf>,

    /// Write the map file into DIR instead of the Downloads directory
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output: Option<PathBuf>,

    /// Also print the rendered tree to stdout
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Exit immediately instead of pausing after the confirmation message
    #[arg(long = "no-pause")]
    no_pause: bool,
}

/// Prints a progress notice for every 50th scanned folder.
struct ConsoleProgress;

impl ProgressReport for ConsoleProgress {
    fn scanning(&mut self, path: &Path) {
        println!("Scanning at: {} \n...", path.display());
    }
}

/// Seconds the confirmation message stays readable in a transient terminal
/// window before the process exits.
const EXIT_PAUSE_SECS: u64 = 3;

fn main() {
    let args = Args::parse();

    // Interactive mode keeps the original prompt-and-retry behavior; a path
    // argument makes the run scriptable and skips the prompt entirely.
    let interactive = args.path.is_none();
    let root = match &args.path {
        Some(given) => {
            let raw = given.to_string_lossy();
            let cleaned = clean_path_input(&raw);
            let path = Path::new(cleaned);
            if !path.is_dir() {
                eprintln!("dirmap: '{}' is not a directory", cleaned);
                process::exit(1);
            }
            path.to_path_buf()
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let prompted = print_banner(&mut stdout)
                .and_then(|_| prompt_for_directory(&mut stdin.lock(), &mut stdout));
            match prompted {
                Ok(Some(path)) => path,
                Ok(None) => {
                    println!("No valid directory path provided. Ending the program.");
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("dirmap: error reading input: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let mut progress = ConsoleProgress;
    let tree = match TreeBuilder::new().with_progress(&mut progress).build(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("dirmap: cannot map '{}': {}", root.display(), e);
            process::exit(1);
        }
    };

    if args.print {
        let formatter = TreeFormatter::new(should_use_color(args.color));
        if let Err(e) = formatter.print(&tree) {
            eprintln!("dirmap: error writing output: {}", e);
            process::exit(1);
        }
    }

    let out_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => default_output_dir().unwrap_or_else(|e| {
            eprintln!("dirmap: {}", e);
            process::exit(1);
        }),
    };

    match write_map_file(&tree, &out_dir) {
        Ok(written) => {
            println!("Directory tree saved to: {}", written.display());
        }
        Err(e) => {
            eprintln!("dirmap: cannot write map file in '{}': {}", out_dir.display(), e);
            process::exit(1);
        }
    }

    // Transient terminal windows close on exit; give the confirmation a
    // moment to be read when the run was interactive.
    if interactive && !args.no_pause {
        thread::sleep(Duration::from_secs(EXIT_PAUSE_SECS));
    }
}
