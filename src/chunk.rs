//! Chunk extraction from section content.
//!
//! A chunk is the part of a section's text that is useful for one purpose. The
//! only kind so far is [`ChunkKind::Code`]: the body of a fenced code block plus
//! the prose "prompt" written before it.

use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::section::SectionTree;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shown in place of a prompt when the content has no fence to anchor one.
pub const NO_PROMPT: &str = "no prompt available";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Kinds of chunk that can be extracted from a section.
pub enum ChunkKind {
    /// A fenced code block and the prose before it.
    Code,
}

impl ChunkKind {
    #[must_use]
    /// Name used on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "code" => Ok(Self::Code),
            other => Err(Error::UnsupportedChunkKind(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Read-only projection of one section's content for a chunk kind.
pub struct Chunk {
    title: String,
    prompt: Option<String>,
    content: Option<String>,
    syntax: Option<String>,
}

impl Chunk {
    #[must_use]
    /// Title copied from the section the chunk came from.
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    /// Extracted payload, `None` when nothing matched.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    /// Prose before the payload, `None` when empty.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    #[must_use]
    /// Prompt for display, falling back to [`NO_PROMPT`].
    pub fn prompt_or_default(&self) -> &str {
        self.prompt().unwrap_or(NO_PROMPT)
    }

    #[must_use]
    /// Language tag declared on the opening fence.
    pub fn syntax(&self) -> Option<&str> {
        self.syntax.as_deref()
    }
}

#[must_use]
/// Extract a chunk of the given kind from section content.
pub fn extract(content: &str, title: &str, kind: ChunkKind) -> Chunk {
    match kind {
        ChunkKind::Code => extract_code(content, title, &MarkdownFormat),
    }
}

/// Extract a chunk whose kind is given by name.
///
/// # Errors
///
/// Returns an error if no chunk kind has that name.
pub fn extract_named(content: &str, title: &str, kind: &str) -> Result<Chunk> {
    Ok(extract(content, title, kind.parse()?))
}

#[must_use]
/// One chunk per section of the tree, in pre-order.
pub fn collect(tree: &SectionTree, kind: ChunkKind) -> Vec<Chunk> {
    tree.preorder()
        .into_iter()
        .filter_map(|index| tree.get(index))
        .map(|section| extract(&section.content, &section.title, kind))
        .collect()
}

#[must_use]
/// Chunks that actually carry a payload, in pre-order, at most `limit` of them.
pub fn collect_with_content(tree: &SectionTree, kind: ChunkKind, limit: usize) -> Vec<Chunk> {
    collect(tree, kind)
        .into_iter()
        .filter(|chunk| chunk.content.is_some())
        .take(limit)
        .collect()
}

/// Code block from the first opening fence to the last closing fence after it.
///
/// With several fenced blocks in one section the body spans all of them.
fn extract_code(content: &str, title: &str, format: &impl Format) -> Chunk {
    let fence = format.fence();
    let prompt = content
        .find(fence)
        .map(|at| content[..at].trim())
        .filter(|prompt| !prompt.is_empty())
        .map(str::to_string);

    let (code, syntax) = match fenced_block(content, fence) {
        Some((body, tag)) => (
            Some(body.trim())
                .filter(|body| !body.is_empty())
                .map(str::to_string),
            tag.map(str::to_string),
        ),
        None => (None, None),
    };

    Chunk {
        title: title.to_string(),
        prompt,
        content: code,
        syntax,
    }
}

/// Body and language tag of the widest fenced region, if it is closed.
///
/// An opening line is the fence followed directly by an optional tag; a line with
/// more backticks after the fence does not open a block. A tag separated from the
/// fence by whitespace is ignored.
fn fenced_block<'c>(content: &'c str, fence: &str) -> Option<(&'c str, Option<&'c str>)> {
    let mut offset = 0;
    let mut opening: Option<(usize, Option<&str>)> = None;
    let mut closing = None;

    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        match opening {
            None => {
                if let Some(rest) = text.strip_prefix(fence) {
                    if !rest.contains('`') {
                        opening = Some((offset + line.len(), fence_tag(rest)));
                    }
                }
            }
            Some(_) => {
                if text.trim_end() == fence {
                    closing = Some(offset);
                }
            }
        }
        offset += line.len();
    }

    let (body_start, tag) = opening?;
    let body_end = closing?;
    Some((&content[body_start..body_end], tag))
}

/// Language tag written directly after the fence, up to the first whitespace.
fn fence_tag(rest: &str) -> Option<&str> {
    if rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next()
}

#[cfg(test)]
#[path = "tests/chunk.rs"]
mod tests;
