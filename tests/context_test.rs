use std::fs;
use std::path::{Path, PathBuf};

use kiln::context::{resolve_output_dir, CliContext, InitContext};
use tempfile::TempDir;

#[test]
fn test_resolve_output_dir_joins_parts() {
    let resolved =
        resolve_output_dir(Path::new("/work"), Path::new("./apps"), "hello-world");
    assert_eq!(resolved, PathBuf::from("/work/./apps/hello-world"));
}

#[test]
fn test_resolved_output_dir_tracks_the_name() {
    let mut context = InitContext::new(None, PathBuf::from("apps"));
    assert!(context.resolved_output_dir().unwrap().ends_with("apps"));

    // The name is adopted after selection; resolution picks it up.
    context.name = Some("hello-world".to_string());
    assert!(context
        .resolved_output_dir()
        .unwrap()
        .ends_with("apps/hello-world"));
}

#[test]
fn test_cli_context_reads_declared_packager() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"name":"x","kiln":{"packager":"yarn"}}"#,
    )
    .unwrap();

    let context = CliContext::create(temp_dir.path()).unwrap();
    assert_eq!(context.packager, "yarn");
}

#[test]
fn test_cli_context_defaults_to_npm() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json"), r#"{"name":"x"}"#).unwrap();

    let context = CliContext::create(temp_dir.path()).unwrap();
    assert_eq!(context.packager, "npm");
}

#[test]
fn test_cli_context_without_descriptor_defaults_to_npm() {
    let temp_dir = TempDir::new().unwrap();
    let context = CliContext::create(temp_dir.path()).unwrap();
    assert_eq!(context.packager, "npm");
}

#[test]
fn test_cli_context_is_created_once() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"name":"x","kiln":{"packager":"pnpm"}}"#,
    )
    .unwrap();

    let mut context =
        InitContext::new(Some(String::new()), temp_dir.path().to_path_buf());
    // An empty name makes the resolved output dir the temp dir itself.
    let first = context.cli_context().unwrap().packager.clone();

    // Changing the descriptor afterwards must not be observed: the handle
    // is created lazily but only once per run.
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{"name":"x","kiln":{"packager":"yarn"}}"#,
    )
    .unwrap();
    let second = context.cli_context().unwrap().packager.clone();

    assert_eq!(first, "pnpm");
    assert_eq!(second, "pnpm");
}
