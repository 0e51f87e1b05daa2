//! Node/link export of a section tree.
//!
//! Ids are assigned in a separate pass instead of being stored on the sections, so
//! a tree never carries a half-assigned id. [`GraphIds`] is the annotated view; any
//! index it did not visit has no id and lookups for it fail.

use crate::error::{Error, Result};
use crate::section::SectionTree;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Flat graph form of a section tree.
pub struct GraphExport {
    /// Sections in pre-order, each tagged with its id.
    pub nodes: Vec<GraphNode>,
    /// One entry per parent/child edge.
    pub links: Vec<GraphLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A section without its children, plus its graph id.
pub struct GraphNode {
    /// Section title.
    pub title: String,
    /// Section content.
    pub content: String,
    /// Structural depth.
    pub level: usize,
    /// Pre-order position of the section.
    pub id: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Parent to child edge between two graph nodes.
pub struct GraphLink {
    /// Id of the parent.
    pub source: usize,
    /// Id of the child.
    pub target: usize,
    /// Level of the parent.
    pub source_level: usize,
    /// Level of the child.
    pub target_level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pre-order ids for the sections of one tree, keyed by arena index.
pub struct GraphIds {
    ids: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl GraphIds {
    #[must_use]
    /// Walk the tree in pre-order and number each section `0..n`.
    pub fn assign(tree: &SectionTree) -> Self {
        let order = tree.preorder();
        let mut ids = vec![None; tree.len()];
        for (id, &index) in order.iter().enumerate() {
            ids[index] = Some(id);
        }
        Self { ids, order }
    }

    /// Id of the section at an arena index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index was not visited when ids were assigned.
    pub fn id_of(&self, index: usize) -> Result<usize> {
        self.ids
            .get(index)
            .copied()
            .flatten()
            .ok_or(Error::MissingGraphId(index))
    }

    #[must_use]
    /// Arena indices in id order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

/// Flatten a tree into graph nodes and parent/child links.
///
/// # Errors
///
/// Returns an error if a section is reached that was not given an id.
pub fn to_graph(tree: &SectionTree) -> Result<GraphExport> {
    let ids = GraphIds::assign(tree);

    let mut nodes = Vec::with_capacity(ids.order().len());
    for &index in ids.order() {
        let Some(section) = tree.get(index) else {
            return Err(Error::MissingGraphId(index));
        };
        nodes.push(GraphNode {
            title: section.title.clone(),
            content: section.content.clone(),
            level: section.level,
            id: ids.id_of(index)?,
        });
    }

    let mut links = Vec::new();
    for &index in ids.order() {
        let Some(parent) = tree.get(index) else {
            continue;
        };
        let source = ids.id_of(index)?;
        for (child_index, child) in tree.children(index) {
            links.push(GraphLink {
                source,
                target: ids.id_of(child_index)?,
                source_level: parent.level,
                target_level: child.level,
            });
        }
    }

    Ok(GraphExport { nodes, links })
}

impl GraphExport {
    /// Serialise as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialise as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "tests/graph.rs"]
mod tests;
