use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use tracing::debug;

use super::filter::PublishedFilter;
use super::types::{AssemblyMeta, TypeMeta};

/// Load the metadata document for `name` from `dir` (`<name>.json`).
/// Missing or invalid metadata is fatal: without it there is nothing to
/// generate for the assembly.
pub fn load_assembly(dir: &Path, name: &str) -> anyhow::Result<AssemblyMeta> {
    let path = dir.join(format!("{name}.json"));
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read assembly metadata {}", path.display()))?;
    let assembly: AssemblyMeta = serde_json::from_str(&raw)
        .with_context(|| format!("invalid assembly metadata in {}", path.display()))?;
    debug!(assembly = name, types = assembly.types.len(), "loaded assembly metadata");
    Ok(assembly)
}

/// Group the assembly's published types by namespace, preserving the order in
/// which the metadata enumerates them. Repeated runs over the same assembly
/// must produce identical groupings, so no re-sorting happens here.
pub fn group_namespaces<'a>(
    assembly: &'a AssemblyMeta,
    filter: Option<&PublishedFilter>,
) -> IndexMap<String, Vec<&'a TypeMeta>> {
    let mut namespaces: IndexMap<String, Vec<&TypeMeta>> = IndexMap::new();
    for ty in &assembly.types {
        if let Some(filter) = filter {
            if !filter.admits(&ty.full_name(), &ty.attributes, ty.attribute_error.as_deref()) {
                continue;
            }
        }
        namespaces.entry(ty.namespace.clone()).or_default().push(ty);
    }
    namespaces
}
