use clap::Parser;

use super::{Cli, Commands};

#[test]
fn test_generate_parses_defaults() {
    let cli = Cli::parse_from([
        "clrstubs-gen",
        "generate",
        "--install-dir",
        "/opt/product/v251",
        "--out",
        "stubs",
    ]);
    match cli.command {
        Commands::Generate {
            install_dir,
            out,
            assembly,
            package_root,
            product,
            product_version,
            clean,
        } => {
            assert_eq!(install_dir.unwrap().to_str(), Some("/opt/product/v251"));
            assert_eq!(out.to_str(), Some("stubs"));
            assert!(assembly.is_empty());
            assert_eq!(package_root, "ansys.mechanical.stubs");
            assert_eq!(product, "Mechanical");
            assert!(product_version.is_none());
            assert!(!clean);
        }
        _ => panic!("expected generate subcommand"),
    }
}

#[test]
fn test_generate_accepts_repeated_assemblies() {
    let cli = Cli::parse_from([
        "clrstubs-gen",
        "generate",
        "--install-dir",
        "/opt/product/v251",
        "--out",
        "stubs",
        "--assembly",
        "Ansys.Mechanical.DataModel",
        "--assembly",
        "Ansys.ACT.WB1",
        "--product-version",
        "26.1",
        "--clean",
    ]);
    match cli.command {
        Commands::Generate {
            assembly,
            product_version,
            clean,
            ..
        } => {
            assert_eq!(
                assembly,
                vec!["Ansys.Mechanical.DataModel", "Ansys.ACT.WB1"]
            );
            assert_eq!(product_version.as_deref(), Some("26.1"));
            assert!(clean);
        }
        _ => panic!("expected generate subcommand"),
    }
}

#[test]
fn test_clean_subcommand() {
    let cli = Cli::parse_from(["clrstubs-gen", "clean", "--out", "stubs"]);
    match cli.command {
        Commands::Clean { out } => assert_eq!(out.to_str(), Some("stubs")),
        _ => panic!("expected clean subcommand"),
    }
}

#[test]
fn test_verbose_flag_is_global() {
    let cli = Cli::parse_from(["clrstubs-gen", "clean", "--out", "stubs", "-v"]);
    assert!(cli.verbose);
}
