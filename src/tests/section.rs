use super::{Section, SectionTree};
use crate::parser::parse_str;
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample() -> SectionTree {
    let mut tree = SectionTree::default();
    let root = tree.push(Section::new("notes", "", 1), None);
    tree.open_children(root);
    let first = tree.push(Section::new("first", "one", 2), Some(root));
    tree.push(Section::new("nested", "deep", 3), Some(first));
    tree.push(Section::new("second", "two", 2), Some(root));
    tree
}

#[test]
fn test_push_links_parent_and_children() {
    let tree = sample();
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.get(0).unwrap().children(), &[1, 3]);
    assert_eq!(tree.get(1).unwrap().parent_index, Some(0));
    assert_eq!(tree.get(2).unwrap().parent_index, Some(1));
    assert!(tree.get(2).unwrap().is_leaf());
    assert!(tree.get(2).unwrap().children_indices.is_none());
}

#[test]
fn test_preorder_visits_parent_before_children() {
    assert_eq!(sample().preorder(), vec![0, 1, 2, 3]);
    assert!(SectionTree::default().preorder().is_empty());
}

#[test]
fn test_children_iterates_in_order() {
    let tree = sample();
    let titles: Vec<&str> = tree.children(0).map(|(_, s)| s.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
    assert_eq!(tree.children(2).count(), 0);
    assert_eq!(tree.children(99).count(), 0);
}

#[test]
fn test_nested_json_shape() {
    let tree = parse_str("doc", "Intro\n# A\nalpha\n## B\nbeta\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "doc",
            "content": "Intro",
            "level": 1,
            "children": [{
                "title": "A",
                "content": "alpha",
                "level": 2,
                "children": [{
                    "title": "B",
                    "content": "beta",
                    "level": 3,
                    "children": null,
                }],
            }],
        })
    );
}

#[test]
fn test_empty_child_list_serializes_as_null() {
    let mut tree = SectionTree::default();
    let root = tree.push(Section::new("empty", "", 1), None);
    tree.open_children(root);

    let value: serde_json::Value = serde_json::from_str(&tree.to_json_pretty().unwrap()).unwrap();
    assert_eq!(value["children"], serde_json::Value::Null);
}
