use super::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.file_extensions, vec!["md", "mdown", "txt"]);
    assert_eq!(config.max_chunks, 20);
}

#[test]
fn test_empty_toml_uses_defaults() {
    assert_eq!(Config::from_toml(""), Config::default());
}

#[test]
fn test_partial_toml_overrides_one_field() {
    let config = Config::from_toml("max_chunks = 5\n");
    assert_eq!(config.max_chunks, 5);
    assert_eq!(config.file_extensions, Config::default().file_extensions);
}

#[test]
fn test_full_toml() {
    let config = Config::from_toml("file_extensions = [\"md\"]\nmax_chunks = 3\n");
    assert_eq!(config.file_extensions, vec!["md"]);
    assert_eq!(config.max_chunks, 3);
}

#[test]
fn test_invalid_toml_falls_back() {
    assert_eq!(Config::from_toml("max_chunks = \"many\""), Config::default());
}
