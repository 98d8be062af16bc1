//! Library integration tests.

use stencil::StencilError;

#[test]
fn error_types_are_public() {
    let err = StencilError::TrailingData {
        path: "templates.json".into(),
    };
    assert!(err.to_string().contains("extra data in JSON"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> stencil::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use stencil::cli::{Cli, Commands};

    let cli = Cli::parse_from(["stencil", "list", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::List(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn cli_paths_resolve_from_flags() {
    use clap::Parser;
    use stencil::cli::Cli;

    let cli = Cli::parse_from([
        "stencil",
        "--template-dir",
        "/tmp/t",
        "--registry",
        "/tmp/t/templates.json",
        "--backup",
        "/tmp/backup.json",
        "install",
    ]);
    let paths = cli.install_paths().unwrap();
    assert_eq!(paths.registry_file, std::path::Path::new("/tmp/t/templates.json"));
    assert_eq!(paths.backup_file, std::path::Path::new("/tmp/backup.json"));
}

#[test]
fn ui_types_are_public() {
    use stencil::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::new();
    ui.message("test");
    assert!(ui.has_message("test"));

    let mode = OutputMode::default();
    assert_eq!(mode, OutputMode::Normal);
}

#[test]
fn bundled_assets_are_public() {
    use stencil::assets::{AssetTree, EmbeddedAssets};

    let tree = EmbeddedAssets::bundled();
    let files = tree
        .walk()
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.is_dir())
        .count();
    assert!(files > 0);
}
