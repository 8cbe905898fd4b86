use std::io::Write;
use vitrine_kernel::config::{ConfigError, load_config};
use vitrine_kernel::domain::config::AppConfig;

#[test]
fn loads_layered_file_with_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");

    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(
        file,
        r#"
[server]
port = 9999

[site]
name = "Test Site"
"#
    )
    .expect("write config file");

    let cfg: AppConfig = load_config(Some(&path)).expect("config should load");

    assert_eq!(cfg.server.port, 9999);
    assert_eq!(cfg.site.name, "Test Site");
    // Sections absent from the file keep their defaults.
    assert_eq!(cfg.cms.base_url, "http://localhost:1337");
    assert_eq!(cfg.cache.fresh().as_secs(), 300);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let err = load_config::<AppConfig>(Some(&path)).expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    std::fs::write(&path, "[server]\nport = \"not-a-number\"\n").expect("write config file");

    assert!(load_config::<AppConfig>(Some(&path)).is_err());
}
