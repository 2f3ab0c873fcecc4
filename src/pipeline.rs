//! End-to-end stub generation pipeline.
//!
//! Resolves the product install, loads each assembly's metadata and XML
//! documentation, writes the namespace packages and finishes with the import
//! back-fill pass. The two passes run strictly in sequence: every namespace
//! package must be on disk before any init is rewritten, otherwise sibling
//! imports would be incomplete.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use crate::assembly::{group_namespaces, load_assembly, PublishedFilter};
use crate::docs::DocIndex;
use crate::generator::{
    add_init_imports, write_domain_root_init, write_module, write_root_init, RootInitTemplateData,
};

/// Assemblies generated when the caller does not name any.
pub const DEFAULT_ASSEMBLIES: &[&str] = &[
    "Ansys.Mechanical.DataModel",
    "Ansys.Mechanical.Interfaces",
    "Ansys.ACT.WB1",
];

/// Top-level namespace segment every generated type lives under.
pub const DOMAIN_ROOT: &str = "Ansys";

/// Environment variable naming the product install directory.
pub const INSTALL_DIR_ENV: &str = "STUBS_INSTALL_DIR";

/// Namespaces excluded from generation. DesignModeler types are exported in
/// the metadata but are not scriptable from Mechanical.
const SKIPPED_NAMESPACES: &[&str] = &["DesignModeler"];

/// One resolved generation run.
#[derive(Debug, Clone)]
pub struct StubConfig {
    /// Directory holding `<assembly>.json` metadata and `<assembly>.xml` docs
    pub install_dir: PathBuf,
    /// Root of the generated package tree
    pub out_dir: PathBuf,
    /// Assemblies to generate, in order
    pub assemblies: Vec<String>,
    /// Dotted package path the tree is importable under
    pub package_root: String,
    /// Product name baked into the top-level docstring
    pub product: String,
    /// Product version baked into the top-level docstring
    pub version: String,
}

/// Resolve the install directory from the environment when the caller did not
/// pass one explicitly.
pub fn resolve_install(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    std::env::var_os(INSTALL_DIR_ENV)
        .map(PathBuf::from)
        .with_context(|| format!("no install directory given and {INSTALL_DIR_ENV} is not set"))
}

/// Derive the product version from the install directory name: the trailing
/// three digits of a versioned install (`v251`) become `25.1`.
pub fn derive_version(install_dir: &Path) -> Option<String> {
    let name = install_dir.file_name()?.to_str()?;
    let digits: String = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if digits.len() != 3 {
        return None;
    }
    Some(format!("{}.{}", &digits[..2], &digits[2..]))
}

fn is_skipped(namespace: &str) -> bool {
    SKIPPED_NAMESPACES
        .iter()
        .any(|skip| namespace == *skip || namespace.starts_with(&format!("{skip}.")))
}

/// Generate the namespace packages of one assembly. Missing XML documentation
/// degrades to undocumented stubs; malformed XML is fatal.
pub fn generate_assembly(
    cfg: &StubConfig,
    name: &str,
    filter: &PublishedFilter,
) -> anyhow::Result<()> {
    let assembly = load_assembly(&cfg.install_dir, name)?;
    let xml_path = cfg.install_dir.join(format!("{name}.xml"));
    let doc = if xml_path.exists() {
        DocIndex::load(&xml_path)?
    } else {
        warn!(assembly = name, path = %xml_path.display(), "no XML documentation, stubs will carry synthesized docstrings");
        DocIndex::empty()
    };
    info!(assembly = name, entries = doc.len(), "generating assembly");
    for (namespace, types) in group_namespaces(&assembly, Some(filter)) {
        if is_skipped(&namespace) {
            info!(namespace, "skipping excluded namespace");
            continue;
        }
        write_module(&namespace, &types, &doc, &cfg.out_dir, Some(filter))?;
    }
    Ok(())
}

/// Run the full pipeline: every assembly's namespace packages, the top-level
/// and domain-root inits, then the import back-fill.
pub fn generate_all(cfg: &StubConfig) -> anyhow::Result<()> {
    std::fs::create_dir_all(&cfg.out_dir).with_context(|| {
        format!("failed to create output directory {}", cfg.out_dir.display())
    })?;
    let filter = PublishedFilter::new();
    for assembly in &cfg.assemblies {
        generate_assembly(cfg, assembly, &filter)?;
    }
    write_root_init(
        &cfg.out_dir,
        &RootInitTemplateData {
            product: cfg.product.clone(),
            version: cfg.version.clone(),
            package_root: cfg.package_root.clone(),
            domain_root: DOMAIN_ROOT.to_string(),
        },
    )?;
    write_domain_root_init(&cfg.out_dir, &cfg.package_root, DOMAIN_ROOT)?;
    add_init_imports(&cfg.out_dir, &cfg.package_root, DOMAIN_ROOT)?;
    info!(out = %cfg.out_dir.display(), "stub generation complete");
    Ok(())
}

/// Delete a previous output tree. A missing tree is not an error.
pub fn clean(out_dir: &Path) -> anyhow::Result<()> {
    match std::fs::remove_dir_all(out_dir) {
        Ok(()) => {
            info!(out = %out_dir.display(), "removed previous output tree");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to remove {}", out_dir.display()))
        }
    }
}
