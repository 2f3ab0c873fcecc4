use std::fs;
use std::path::Path;

use anyhow::Context;
use askama::Template;
use tracing::info;

/// Template data for the top-level package init: a product docstring plus the
/// eager import of the domain-root subpackage.
#[derive(Template)]
#[template(path = "root_init.py.txt", escape = "none")]
pub struct RootInitTemplateData {
    /// Product name for the package docstring
    pub product: String,
    /// Product version baked into the docstring
    pub version: String,
    /// Dotted package path the generated tree lives under
    pub package_root: String,
    /// Name of the domain-root subpackage
    pub domain_root: String,
}

/// Write the top-level `__init__.py` of the generated tree.
pub fn write_root_init(outdir: &Path, data: &RootInitTemplateData) -> anyhow::Result<()> {
    let rendered = data.render().context("failed to render root init template")?;
    let path = outdir.join("__init__.py");
    fs::write(&path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote root package init");
    Ok(())
}
