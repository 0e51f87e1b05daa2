//! Markdown format implementation.
//!
//! ATX-style headings (# syntax) and GitHub-style fenced code blocks.

use crate::formats::Format;

/// Markers for ATX-style markdown headings and triple-backtick fences.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading_marker(&self) -> char {
        '#'
    }

    fn fence(&self) -> &'static str {
        "```"
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["md", "mdown", "txt"]
    }
}
