//! In-place normalization of blocklist text files.
//!
//! Each line carries a fixed two-character prefix left behind by the
//! upstream list export; cleaning drops that prefix, trims the remainder,
//! and removes duplicate lines while keeping first-seen order. Files are
//! rewritten in place with a guaranteed trailing newline.
//!
//! The prefix strip is unconditional: lines shorter than two characters
//! collapse to one empty entry, and re-running the cleaner strips two more
//! characters from every line. Do not make it conditional without
//! confirming the upstream format.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

/// macOS Finder metadata artifact, never a blocklist.
pub const MACOS_METADATA_FILE: &str = ".DS_Store";

/// Drop the first two characters of a line and trim surrounding
/// whitespace. Counted in characters, not bytes, so multi-byte prefixes
/// do not split a code point.
pub fn normalize_line(line: &str) -> String {
    let stripped: String = line.chars().skip(2).collect();
    stripped.trim().to_string()
}

/// Deduplicate by exact string match. The first occurrence wins and the
/// order of first appearance is preserved.
pub fn dedup_first_seen<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for line in lines {
        if seen.insert(line.clone()) {
            unique.push(line);
        }
    }
    unique
}

/// Normalize one file in place: strip the per-line prefix, trim, dedup,
/// and rewrite with one entry per line plus a trailing newline. Returns
/// the number of unique entries written.
pub fn clean_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let unique = dedup_first_seen(contents.lines().map(normalize_line));
    debug!(
        "{}: {} lines, {} unique",
        path.display(),
        contents.lines().count(),
        unique.len()
    );
    let mut out = unique.join("\n");
    out.push('\n');
    fs::write(path, out).with_context(|| format!("write {}", path.display()))?;
    Ok(unique.len())
}

/// List the regular files directly inside `dir`, skipping `.DS_Store`
/// and anything that is not a regular file. Non-recursive; iteration
/// order is whatever the platform's directory listing yields.
pub fn cleanable_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries =
        fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", dir.display()))?;
        if entry.file_name() == MACOS_METADATA_FILE {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("skipping non-file entry {}", path.display());
        }
    }
    Ok(files)
}
