//! Section representation for parsed documents.
//!
//! A section represents a hierarchical division of a document, typically
//! corresponding to a heading in markdown, a markdown file, or a directory of
//! notes. Sections live in an arena owned by [`SectionTree`] and refer to each
//! other by index, so the tree can be walked in either direction without
//! shared mutable references.

use crate::error::Result;
use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Hierarchical document division holding its heading and the text directly beneath it.
pub struct Section {
    /// Section heading text without markup symbols, or the file/directory name for roots.
    pub title: String,
    /// Text between the heading and the next heading, trimmed.
    pub content: String,
    /// Nesting depth in the tree (1 for the root), independent of the heading's `#` count.
    pub level: usize,
    /// Index of the containing section in the arena.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections; `None` marks a leaf holding only content.
    pub children_indices: Option<Vec<usize>>,
}

impl Section {
    #[must_use]
    /// Creates a leaf section with no parent or children yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>, level: usize) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            level,
            parent_index: None,
            children_indices: None,
        }
    }

    #[must_use]
    /// Direct child indices, empty for leaves.
    pub fn children(&self) -> &[usize] {
        self.children_indices.as_deref().unwrap_or(&[])
    }

    #[must_use]
    /// Whether this section has no subsections at all.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Arena of sections in pre-order; the root sits at index 0.
pub struct SectionTree {
    sections: Vec<Section>,
}

impl SectionTree {
    /// Index of the root section.
    pub const ROOT: usize = 0;

    /// Appends a section and links it under `parent`, returning its index.
    pub(crate) fn push(&mut self, mut section: Section, parent: Option<usize>) -> usize {
        let index = self.sections.len();
        section.parent_index = parent;
        if let Some(parent) = parent {
            self.sections[parent]
                .children_indices
                .get_or_insert_with(Vec::new)
                .push(index);
        }
        self.sections.push(section);
        index
    }

    /// Marks a section as a container even if nothing ends up inside it.
    pub(crate) fn open_children(&mut self, index: usize) {
        self.sections[index]
            .children_indices
            .get_or_insert_with(Vec::new);
    }

    #[must_use]
    /// The root section, if the tree is not empty.
    pub fn root(&self) -> Option<&Section> {
        self.sections.first()
    }

    #[must_use]
    /// Section at an arena index.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    /// Number of sections in the tree.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether the tree holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Direct children of a section, in document order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = (usize, &Section)> {
        self.sections
            .get(index)
            .map(Section::children)
            .unwrap_or_default()
            .iter()
            .map(|&child| (child, &self.sections[child]))
    }

    #[must_use]
    /// Arena indices in pre-order: each node before its children, children in order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.sections.len());
        if self.sections.is_empty() {
            return order;
        }
        let mut stack = vec![Self::ROOT];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.sections[index].children().iter().rev());
        }
        order
    }

    /// Serialise the tree as nested JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.nested(Self::ROOT))?)
    }

    /// Serialise the tree as indented nested JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.nested(Self::ROOT))?)
    }

    #[must_use]
    /// Borrowing view that serialises `index` and everything below it.
    pub fn nested(&self, index: usize) -> NestedSection<'_> {
        NestedSection { tree: self, index }
    }
}

/// Recursive serde view over a subtree: `{title, content, level, children}`.
///
/// Absent and empty child lists both serialise as `null`.
pub struct NestedSection<'a> {
    tree: &'a SectionTree,
    index: usize,
}

impl Serialize for NestedSection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let section = &self.tree.sections[self.index];
        let children: Option<Vec<NestedSection<'_>>> = if section.is_leaf() {
            None
        } else {
            Some(
                section
                    .children()
                    .iter()
                    .map(|&index| self.tree.nested(index))
                    .collect(),
            )
        };

        let mut state = serializer.serialize_struct("Section", 4)?;
        state.serialize_field("title", &section.title)?;
        state.serialize_field("content", &section.content)?;
        state.serialize_field("level", &section.level)?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
