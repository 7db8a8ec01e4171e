//! Name-based exclusion rule for counted files

/// Returns true when a directory entry's name counts as a regular file.
///
/// Temp-style files (`~` prefix) and database artifacts (`.db` suffix) are
/// skipped. Everything else counts, hidden files included.
pub fn counts_as_file(name: &str) -> bool {
    !(name.starts_with('~') || name.ends_with(".db"))
}
