use std::io::Write;

use koto_console::config::ConsoleConfig;

#[test]
fn missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load_from(dir.path().join("console.toml")).unwrap();
    assert_eq!(config.browser.root_label, "マイドライブ");
    assert!(!config.browser.cache_listings);
    assert_eq!(config.source, None);
}

#[test]
fn file_values_are_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[browser]
root_label = "My Drive"
cache_listings = true

[log]
level = "debug"
"#
    )
    .unwrap();

    let config = ConsoleConfig::load_from(file.path()).unwrap();
    assert_eq!(config.browser.root_label, "My Drive");
    assert!(config.browser.cache_listings);
    assert_eq!(config.source.as_deref(), Some(file.path()));
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[browser\nroot_label = ").unwrap();

    let err = ConsoleConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse settings TOML"));
}
