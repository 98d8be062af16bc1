//! Integration tests for the registry and install public API.

use std::fs;
use std::path::Path;

use stencil::assets::MemoryAssets;
use stencil::config::InstallPaths;
use stencil::install::{self, InstallPlan};
use stencil::registry::{decode_registry, discover, merge, to_json_bytes, Registry};
use stencil::StencilError;
use tempfile::TempDir;

const GRID_ONLY: &str = r#"{
    "templates": [
        {
            "name": "Grid",
            "filename": "Grid",
            "iconCode": "\ue9fe",
            "categories": ["Grids"]
        }
    ]
}"#;

fn tree() -> MemoryAssets {
    MemoryAssets::new()
        .with_file("Grids/P Grid.png", b"grid".to_vec())
        .with_file("Lines/LS Lines.png", b"lines".to_vec())
}

fn paths(temp: &TempDir) -> InstallPaths {
    InstallPaths::resolve(
        temp.path().join("templates"),
        temp.path().join("templates/templates.json"),
        temp.path().join("backup.json"),
    )
    .unwrap()
}

#[test]
fn existing_entry_wins_and_new_entry_is_appended() {
    let existing = decode_registry(GRID_ONLY.as_bytes(), Path::new("templates.json")).unwrap();
    let outcome = merge(&existing, discover(&tree()).unwrap());

    assert_eq!(outcome.registry.names(), vec!["Grid", "Lines"]);
    assert_eq!(outcome.registry.get("Grid").unwrap().filename, "Grid");

    let lines = outcome.registry.get("Lines").unwrap();
    assert_eq!(lines.filename, "Lines/LS Lines.png");
    assert_eq!(lines.categories, vec!["Lines"]);
    assert!(lines.landscape);
}

#[test]
fn serialized_merge_decodes_back() {
    let existing = decode_registry(GRID_ONLY.as_bytes(), Path::new("templates.json")).unwrap();
    let outcome = merge(&existing, discover(&tree()).unwrap());

    let bytes = to_json_bytes(&outcome.registry).unwrap();
    let decoded = decode_registry(&bytes, Path::new("templates.json")).unwrap();
    assert_eq!(decoded, outcome.registry);
}

#[test]
fn install_end_to_end() {
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    fs::create_dir_all(&paths.template_dir).unwrap();
    fs::write(&paths.registry_file, GRID_ONLY).unwrap();

    let report = install::install(&paths, &tree()).unwrap();

    assert_eq!(report.added, vec!["Lines"]);
    assert_eq!(report.backup.as_deref(), Some(paths.backup_file.as_path()));
    assert_eq!(fs::read_to_string(&paths.backup_file).unwrap(), GRID_ONLY);
    assert_eq!(
        fs::read(paths.template_dir.join("Lines/LS Lines.png")).unwrap(),
        b"lines"
    );

    let written = fs::read(&paths.registry_file).unwrap();
    let registry = decode_registry(&written, &paths.registry_file).unwrap();
    assert_eq!(registry.names(), vec!["Grid", "Lines"]);
}

#[test]
fn install_twice_leaves_registry_unchanged() {
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);

    install::install(&paths, &tree()).unwrap();
    let first = fs::read(&paths.registry_file).unwrap();

    let report = install::install(&paths, &tree()).unwrap();
    assert!(report.added.is_empty());
    assert_eq!(fs::read(&paths.registry_file).unwrap(), first);
    // second run backs up the first run's output
    assert_eq!(fs::read(&paths.backup_file).unwrap(), first);
}

#[test]
fn supplementary_icon_survives_repeated_installs() {
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    fs::create_dir_all(&paths.template_dir).unwrap();
    fs::write(
        &paths.registry_file,
        r#"{"templates":[{"name":"Day","filename":"Day","iconCode":"\ud83d\udcc5","categories":["Calendars"]}]}"#,
    )
    .unwrap();

    install::install(&paths, &tree()).unwrap();
    let first = fs::read_to_string(&paths.registry_file).unwrap();
    assert!(first.contains(r#""iconCode": "\ud83d""#));

    let report = install::install(&paths, &tree()).unwrap();
    assert!(report.added.is_empty());
    let second = fs::read(&paths.registry_file).unwrap();
    let registry = decode_registry(&second, &paths.registry_file).unwrap();
    assert_eq!(registry.names(), vec!["Day", "Grid", "Lines"]);
    assert_eq!(registry.get("Day").unwrap().icon_code, "\u{fffd}");

    install::install(&paths, &tree()).unwrap();
    assert_eq!(fs::read(&paths.registry_file).unwrap(), second);
}

#[cfg(unix)]
#[test]
fn symlinked_registry_is_updated_in_place() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    fs::create_dir_all(&paths.template_dir).unwrap();
    let persistent = temp.path().join("persist.json");
    fs::write(&persistent, r#"{"templates":[]}"#).unwrap();
    symlink(&persistent, &paths.registry_file).unwrap();

    install::install(&paths, &tree()).unwrap();

    let meta = fs::symlink_metadata(&paths.registry_file).unwrap();
    assert!(meta.file_type().is_symlink());
    let registry = decode_registry(&fs::read(&persistent).unwrap(), &persistent).unwrap();
    assert_eq!(registry.names(), vec!["Grid", "Lines"]);
    assert_eq!(fs::read_to_string(&paths.backup_file).unwrap(), r#"{"templates":[]}"#);
}

#[test]
fn registry_path_that_is_a_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    fs::create_dir_all(paths.registry_file.join("occupied")).unwrap();

    let err = install::install(&paths, &tree()).unwrap_err();
    assert!(matches!(err, StencilError::RegistryRead { .. }));
}

#[test]
fn plan_without_registry_uses_bundled_only() {
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    let tree = tree();

    let plan = InstallPlan::build(&paths, None, &tree).unwrap();
    assert!(plan.backup.is_none());
    assert_eq!(plan.registry.names(), vec!["Grid", "Lines"]);
    assert_eq!(plan.file_count(), 2);
    assert!(!paths.template_dir.exists());
}

#[test]
fn broken_registry_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let paths = paths(&temp);
    fs::create_dir_all(&paths.template_dir).unwrap();
    fs::write(&paths.registry_file, "{\"templates\": [}").unwrap();

    let err = install::install(&paths, &tree()).unwrap_err();
    assert!(matches!(err, StencilError::RegistryDecode { .. }));
    assert!(!paths.backup_file.exists());
    assert!(!paths.template_dir.join("Grids").exists());
}

#[test]
fn empty_registry_gains_every_discovered_template() {
    let registry = Registry::new();
    let outcome = merge(&registry, discover(&tree()).unwrap());
    assert_eq!(outcome.added, vec!["Grid", "Lines"]);
    assert!(outcome.skipped.is_empty());
}
