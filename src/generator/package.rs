use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::emit::{write_class, write_enum};
use crate::assembly::{PublishedFilter, TypeMeta};
use crate::docs::DocIndex;

/// Write the package for one namespace: one directory per dot-separated
/// segment under `outdir`, with an `__init__.py` holding every published enum
/// and class of the namespace. Returns the package directory.
///
/// The enum-support import is only emitted when the namespace actually
/// contains enums; `import typing` is unconditional because every stub body
/// mentions `typing.Optional`.
pub fn write_module(
    namespace: &str,
    types: &[&TypeMeta],
    doc: &DocIndex,
    outdir: &Path,
    filter: Option<&PublishedFilter>,
) -> anyhow::Result<PathBuf> {
    let mut dir = outdir.to_path_buf();
    for segment in namespace.split('.') {
        dir.push(segment);
    }
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create package directory {}", dir.display()))?;

    let package_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| namespace.to_string());

    let class_types: Vec<&TypeMeta> = types
        .iter()
        .copied()
        .filter(|t| t.is_class() || t.is_interface())
        .collect();
    let enum_types: Vec<&TypeMeta> = types.iter().copied().filter(|t| t.is_enum()).collect();
    debug!(
        namespace,
        classes = class_types.len(),
        enums = enum_types.len(),
        "writing namespace package"
    );

    let mut buf = String::new();
    buf.push_str(&format!("\"\"\"{package_name} subpackage.\"\"\"\n"));
    if !enum_types.is_empty() {
        buf.push_str("from enum import Enum\n");
    }
    buf.push_str("import typing\n\n");
    for enum_type in &enum_types {
        write_enum(&mut buf, enum_type, namespace, doc, filter);
    }
    for class_type in &class_types {
        write_class(&mut buf, class_type, namespace, doc, filter);
    }

    let init_path = dir.join("__init__.py");
    fs::write(&init_path, buf)
        .with_context(|| format!("failed to write {}", init_path.display()))?;
    info!(namespace, path = %init_path.display(), "wrote namespace package");
    Ok(dir)
}
