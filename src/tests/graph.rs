use super::{to_graph, GraphIds, GraphLink};
use crate::error::Error;
use crate::parser::parse_str;
use crate::section::{Section, SectionTree};
use pretty_assertions::assert_eq;

const DOC: &str = "# A\nalpha\n## A1\none\n### A1a\ndeep\n# B\nbeta\n";

#[test]
fn test_ids_follow_preorder() {
    let tree = parse_str("doc", DOC).unwrap();
    let graph = to_graph(&tree).unwrap();

    let nodes: Vec<(usize, &str, usize)> = graph
        .nodes
        .iter()
        .map(|n| (n.id, n.title.as_str(), n.level))
        .collect();
    assert_eq!(
        nodes,
        vec![
            (0, "doc", 1),
            (1, "A", 2),
            (2, "A1", 3),
            (3, "A1a", 4),
            (4, "B", 2),
        ]
    );
}

#[test]
fn test_one_link_per_edge() {
    let tree = parse_str("doc", DOC).unwrap();
    let graph = to_graph(&tree).unwrap();

    let link = |source, target, source_level, target_level| GraphLink {
        source,
        target,
        source_level,
        target_level,
    };
    assert_eq!(
        graph.links,
        vec![
            link(0, 1, 1, 2),
            link(0, 4, 1, 2),
            link(1, 2, 2, 3),
            link(2, 3, 3, 4),
        ]
    );
    assert_eq!(graph.links.len(), graph.nodes.len() - 1);
}

#[test]
fn test_ids_ignore_arena_order() {
    // A grandchild pushed after its parent's sibling still numbers before that sibling.
    let mut tree = SectionTree::default();
    let root = tree.push(Section::new("root", "", 1), None);
    let late = tree.push(Section::new("late", "", 2), Some(root));
    tree.push(Section::new("early", "", 2), Some(root));
    tree.push(Section::new("under late", "", 3), Some(late));

    let ids = GraphIds::assign(&tree);
    assert_eq!(ids.order(), &[0, 1, 3, 2]);
    assert_eq!(ids.id_of(3).unwrap(), 2);
    assert_eq!(ids.id_of(2).unwrap(), 3);
}

#[test]
fn test_unassigned_index_is_an_error() {
    let tree = parse_str("doc", DOC).unwrap();
    let ids = GraphIds::assign(&tree);
    let err = ids.id_of(tree.len()).unwrap_err();
    assert!(matches!(err, Error::MissingGraphId(5)));
}

#[test]
fn test_graph_json_shape() {
    let tree = parse_str("doc", "# A\nalpha").unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&to_graph(&tree).unwrap().to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "nodes": [
                {"title": "doc", "content": "", "level": 1, "id": 0},
                {"title": "A", "content": "alpha", "level": 2, "id": 1},
            ],
            "links": [
                {"source": 0, "target": 1, "source_level": 1, "target_level": 2},
            ],
        })
    );
}

#[test]
fn test_empty_tree_exports_nothing() {
    let graph = to_graph(&SectionTree::default()).unwrap();
    assert!(graph.nodes.is_empty());
    assert!(graph.links.is_empty());
}
