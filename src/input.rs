//! File-system boundary: whole-file reads, the markdown probe and directory listings.
//!
//! Everything that touches the disk lives here so the parser itself stays a pure
//! function of the text it is given.

use crate::error::{Error, Result};
use crate::formats::Format;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// What a directory entry turned out to be after filtering.
pub enum Entry {
    /// A text file with an allowed extension that contains a heading line.
    Document(PathBuf),
    /// A subdirectory to walk.
    Directory(PathBuf),
}

/// Read a whole file into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::unreadable(path, e))
}

/// Check whether any line of the file starts with a heading marker.
///
/// Files that are not valid UTF-8 fail the probe rather than aborting the walk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn looks_like_markdown(path: &Path, format: &impl Format) -> Result<bool> {
    let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) if line.starts_with(format.heading_marker()) => return Ok(true),
            Ok(_) => {}
            Err(e) => {
                log::debug!("stopping markdown probe of {}: {e}", path.display());
                return Ok(false);
            }
        }
    }
    Ok(false)
}

#[must_use]
/// Whether the file name is hidden (dotfile or dot-directory).
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[must_use]
/// Whether the path's extension is in the allow-list (compared without the dot).
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// List the documents and subdirectories directly inside `dir`, sorted by file name.
///
/// Hidden entries, files with other extensions and files without a heading line are
/// left out.
///
/// # Errors
///
/// Returns an error if the directory or one of its candidate files cannot be read.
pub fn list_directory(
    dir: &Path,
    extensions: &[String],
    format: &impl Format,
) -> Result<Vec<Entry>> {
    let mut paths = fs::read_dir(dir)
        .map_err(|e| Error::unreadable(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()
        .map_err(|e| Error::unreadable(dir, e))?;
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut entries = Vec::new();
    for path in paths {
        if is_hidden(&path) {
            log::debug!("skipping hidden entry {}", path.display());
            continue;
        }
        if path.is_file() && has_allowed_extension(&path, extensions) {
            if looks_like_markdown(&path, format)? {
                entries.push(Entry::Document(path));
            } else {
                log::debug!("skipping {}: no heading line", path.display());
            }
        } else if path.is_dir() {
            entries.push(Entry::Directory(path));
        } else {
            log::debug!("skipping {}", path.display());
        }
    }
    Ok(entries)
}

#[must_use]
/// Root title for a file: its base name without the extension.
pub fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[must_use]
/// Root title for a directory: its base name, resolving `.`-style paths first.
pub fn directory_title(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    fs::canonicalize(path)
        .ok()
        .and_then(|full| full.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
