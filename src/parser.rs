//! Recursive section parser.
//!
//! A document is split at its highest-level headings (fewest markers present), and
//! each piece is parsed again one level deeper. The structural `level` of a section
//! counts recursion depth, so a jump from `#` straight to `###` still yields a child
//! at parent level + 1.
//!
//! Headings are found with a line scanner: a heading line is any line, at the start
//! of the text or right after `\n`, that begins with the format's heading marker.

use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::input::{self, Entry};
use crate::section::{Section, SectionTree};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a markdown file into a tree rooted at a section titled after the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a subsection is malformed.
pub fn parse_file(path: &Path) -> Result<SectionTree> {
    Parser::new(MarkdownFormat).parse_file(path)
}

/// Parse a directory of markdown files into a tree rooted at the directory.
///
/// # Errors
///
/// Returns an error if the directory or one of its documents cannot be read or parsed.
pub fn parse_directory(path: &Path) -> Result<SectionTree> {
    Parser::new(MarkdownFormat).parse_directory(path)
}

/// Parse in-memory document text under a root with the given title.
///
/// # Errors
///
/// Returns an error if a subsection is malformed.
pub fn parse_str(title: &str, text: &str) -> Result<SectionTree> {
    Parser::new(MarkdownFormat).parse_str(title, text)
}

/// Section parser parameterised by markup format and the file extensions it walks.
pub struct Parser<F: Format> {
    format: F,
    extensions: Vec<String>,
}

impl<F: Format> Parser<F> {
    #[must_use]
    /// Parser that walks the format's default extensions.
    pub fn new(format: F) -> Self {
        let extensions = format
            .default_extensions()
            .iter()
            .map(|ext| (*ext).to_string())
            .collect();
        Self { format, extensions }
    }

    #[must_use]
    /// Replace the allow-listed extensions used by directory walks.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Parse a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a subsection is malformed.
    pub fn parse_file(&self, path: &Path) -> Result<SectionTree> {
        let mut tree = SectionTree::default();
        self.file_into(&mut tree, path, None, 1)?;
        Ok(tree)
    }

    /// Parse a directory, recursing into subdirectories.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory or document cannot be read or parsed.
    pub fn parse_directory(&self, path: &Path) -> Result<SectionTree> {
        let mut tree = SectionTree::default();
        let mut visited = HashSet::new();
        visited.insert(canonical(path)?);
        self.directory_into(&mut tree, &mut visited, path, None, 1)?;
        Ok(tree)
    }

    /// Parse document text as if it were the body of a file named `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if a subsection is malformed.
    pub fn parse_str(&self, title: &str, text: &str) -> Result<SectionTree> {
        let mut tree = SectionTree::default();
        self.document_into(&mut tree, title, text, None, 1)?;
        Ok(tree)
    }

    fn directory_into(
        &self,
        tree: &mut SectionTree,
        visited: &mut HashSet<PathBuf>,
        path: &Path,
        parent: Option<usize>,
        level: usize,
    ) -> Result<usize> {
        let title = input::directory_title(path);
        log::debug!("parsing directory {} as {title:?}", path.display());
        let index = tree.push(Section::new(title, "", level), parent);
        tree.open_children(index);

        for entry in input::list_directory(path, &self.extensions, &self.format)? {
            match entry {
                Entry::Document(file) => {
                    self.file_into(tree, &file, Some(index), level + 1)?;
                }
                Entry::Directory(dir) => {
                    // Symlinks may lead back to a directory already in the tree.
                    if !visited.insert(canonical(&dir)?) {
                        log::debug!("skipping {}: directory already walked", dir.display());
                        continue;
                    }
                    self.directory_into(tree, visited, &dir, Some(index), level + 1)?;
                }
            }
        }
        Ok(index)
    }

    fn file_into(
        &self,
        tree: &mut SectionTree,
        path: &Path,
        parent: Option<usize>,
        level: usize,
    ) -> Result<usize> {
        let text = input::read_document(path)?;
        let title = input::file_title(path);
        log::info!("parsing {} as {title:?}", path.display());
        self.document_into(tree, &title, &text, parent, level)
    }

    fn document_into(
        &self,
        tree: &mut SectionTree,
        title: &str,
        text: &str,
        parent: Option<usize>,
        level: usize,
    ) -> Result<usize> {
        let (content, rest) = self.split_content(text);
        let index = tree.push(Section::new(title, content, level), parent);
        if let Some(rest) = rest {
            self.children_into(tree, rest, index, level + 1)?;
        }
        Ok(index)
    }

    fn section_into(
        &self,
        tree: &mut SectionTree,
        text: &str,
        parent: usize,
        level: usize,
    ) -> Result<usize> {
        let (title, body) = self.split_title(text)?;
        let (content, rest) = self.split_content(body);
        let index = tree.push(Section::new(title, content, level), Some(parent));
        if let Some(rest) = rest {
            self.children_into(tree, rest, index, level + 1)?;
        }
        Ok(index)
    }

    fn children_into(
        &self,
        tree: &mut SectionTree,
        text: &str,
        parent: usize,
        level: usize,
    ) -> Result<()> {
        for piece in self.split_sections(text) {
            self.section_into(tree, piece, parent, level)?;
        }
        Ok(())
    }

    /// Split a heading-led text into its title and everything after the heading line.
    ///
    /// The title loses its leading markers and surrounding whitespace.
    pub(crate) fn split_title<'t>(&self, text: &'t str) -> Result<(&'t str, &'t str)> {
        let marker = self.format.heading_marker();
        if !text.starts_with(marker) {
            let first_line = text.lines().next().unwrap_or_default();
            return Err(Error::malformed(format!(
                "expected a line starting with {marker:?}, found {first_line:?}"
            )));
        }
        let (line, body) = text.split_once('\n').unwrap_or((text, ""));
        Ok((line.trim_start_matches(marker).trim(), body))
    }

    /// Split text into the trimmed content before the first heading line and the rest.
    ///
    /// The rest starts at that heading; `None` when there is no heading at all.
    pub(crate) fn split_content<'t>(&self, text: &'t str) -> (&'t str, Option<&'t str>) {
        match self.heading_lines(text).first() {
            Some(&(offset, _)) => (text[..offset].trim(), Some(&text[offset..])),
            None => (text.trim(), None),
        }
    }

    /// Group heading-led text into one piece per highest-level heading.
    ///
    /// Deeper headings stay inside the piece they fall under. The `\n` before each
    /// split point is dropped. Text ahead of the first split point is kept as a
    /// leading piece of its own.
    pub(crate) fn split_sections<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let headings = self.heading_lines(text);
        let Some(highest) = headings.iter().map(|&(_, depth)| depth).min() else {
            return Vec::new();
        };

        let mut starts: Vec<usize> = headings
            .iter()
            .filter(|&&(_, depth)| depth == highest)
            .map(|&(offset, _)| offset)
            .collect();
        if starts.first().is_some_and(|&first| first > 0) {
            starts.insert(0, 0);
        }

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| match starts.get(i + 1) {
                // A split point past 0 always follows a newline.
                Some(&next) => &text[start..next - 1],
                None => &text[start..],
            })
            .collect()
    }

    /// Byte offset and marker count of every heading line, in order.
    fn heading_lines(&self, text: &str) -> Vec<(usize, usize)> {
        let marker = self.format.heading_marker();
        let mut headings = Vec::new();
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            let depth = line.chars().take_while(|&c| c == marker).count();
            if depth > 0 {
                headings.push((offset, depth));
            }
            offset += line.len();
        }
        headings
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::unreadable(path, e))
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
