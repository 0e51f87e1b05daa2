use super::{Args, Output, Source};
use clap::Parser;
use std::path::Path;

#[test]
fn test_each_source_flag_resolves() {
    let args = Args::try_parse_from(["memit", "--filepath", "notes.md"]).unwrap();
    assert!(matches!(Source::from_args(&args), Some(Source::File(p)) if p == Path::new("notes.md")));

    let args = Args::try_parse_from(["memit", "-d", "notes"]).unwrap();
    assert!(matches!(Source::from_args(&args), Some(Source::Directory(p)) if p == Path::new("notes")));

    let args = Args::try_parse_from(["memit", "--path", "notes"]).unwrap();
    assert!(matches!(Source::from_args(&args), Some(Source::Detect(_))));
}

#[test]
fn test_source_is_required_and_exclusive() {
    assert!(Args::try_parse_from(["memit", "--json"]).is_err());
    assert!(Args::try_parse_from(["memit", "-f", "a.md", "-d", "notes"]).is_err());
}

#[test]
fn test_output_modes() {
    let args = Args::try_parse_from(["memit", "-f", "a.md"]).unwrap();
    assert!(matches!(Output::from_args(&args), Output::Tree));

    let args = Args::try_parse_from(["memit", "-f", "a.md", "--graph"]).unwrap();
    assert!(matches!(Output::from_args(&args), Output::Graph));

    let args = Args::try_parse_from(["memit", "-f", "a.md", "--chunks", "--kind", "code"]).unwrap();
    assert!(matches!(Output::from_args(&args), Output::Chunks));

    assert!(Args::try_parse_from(["memit", "-f", "a.md", "--graph", "--chunks"]).is_err());
    assert!(Args::try_parse_from(["memit", "-f", "a.md", "--kind", "quote"]).is_err());
}
