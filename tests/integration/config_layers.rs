//! Layered configuration loading through the public loader.

use super::test_utils::with_isolated_env;
use adcraft::cli::RunContext;
use adcraft::config::ConfigLoader;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn env_overrides_workspace_file() {
    let dir = TempDir::new().unwrap();
    let workspace = dir.path().join("workspace");
    std::fs::create_dir_all(workspace.join("config")).unwrap();
    std::fs::write(
        workspace.join("config/config.toml"),
        "[generation]\noutput_dir = \"from-file\"\n\n[logging]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = with_isolated_env(&dir.path().join("xdg"), || {
        std::env::set_var("ADCRAFT__GENERATION__OUTPUT_DIR", "from-env");
        ConfigLoader::load(&workspace).unwrap()
    });
    assert_eq!(config.generation.output_dir, PathBuf::from("from-env"));
    assert_eq!(config.logging.format, "json");
}

#[test]
fn development_env_file_applies_by_default() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    std::fs::write(
        dir.path().join("config/development.toml"),
        "[provider]\nendpoint = \"http://127.0.0.1:8787/generate\"\n",
    )
    .unwrap();

    let context = with_isolated_env(&dir.path().join("xdg"), || {
        RunContext::new(dir.path().to_path_buf(), None).unwrap()
    });
    assert_eq!(
        context.config().provider.endpoint,
        "http://127.0.0.1:8787/generate"
    );
}

#[test]
fn explicit_config_file_skips_layers() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("custom.toml");
    std::fs::write(&file, "[provider]\nconnect_timeout_secs = 3\n").unwrap();

    let context = RunContext::new(dir.path().to_path_buf(), Some(file)).unwrap();
    assert_eq!(context.config().provider.connect_timeout_secs, 3);
    assert_eq!(context.config().provider.request_timeout_secs, 120);
}

#[test]
fn missing_explicit_config_file_fails() {
    let dir = TempDir::new().unwrap();
    assert!(RunContext::new(dir.path().to_path_buf(), Some(dir.path().join("nope.toml"))).is_err());
}
