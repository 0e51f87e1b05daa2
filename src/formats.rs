//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the markup a document
//! uses to mark headings and code fences. Only ATX-style markdown is implemented.

pub mod markdown;

/// Markup tokens the section parser and chunk extractor scan for.
pub trait Format {
    /// Character that opens a heading line when repeated at its start.
    fn heading_marker(&self) -> char;
    /// Token that opens and closes a fenced code block.
    fn fence(&self) -> &str;
    /// File suffixes (without the dot) that may hold documents of this format.
    fn default_extensions(&self) -> &[&str];
}
