//! Import back-fill across the generated package tree.
//!
//! Namespaces are discovered incrementally, so a parent directory may be
//! touched by several namespaces and sibling relationships are only known
//! once the whole walk completes. This second pass rewrites every init file
//! so that each package imports its immediate child subpackages, which makes
//! the full dotted namespace path importable from the root.
//!
//! Generated modules reference domain types as quoted forward references, so
//! the domain root must be importable at type-check time everywhere. Inits
//! that already carry module content get the deferred-import guard
//! (`typing.TYPE_CHECKING`) plus `from __future__ import annotations` instead
//! of an eager import; eager imports of the domain root between sibling
//! packages would trip circular-import failures.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;
use walkdir::WalkDir;

const FUTURE_IMPORT: &str = "from __future__ import annotations\n";

/// Sorted immediate child package directories of `dir`.
fn child_packages(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("failed to list package directory {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            children.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    children.sort();
    Ok(children)
}

/// Write the init file of the domain-root package itself, importing each of
/// its immediate child packages. Runs before the back-fill pass, which only
/// visits directories below the root.
pub fn write_domain_root_init(
    outdir: &Path,
    package_root: &str,
    domain_root: &str,
) -> anyhow::Result<()> {
    let root = outdir.join(domain_root);
    let mut content = format!("\"\"\"{domain_root} subpackage.\"\"\"\n");
    for child in child_packages(&root)? {
        content.push_str(&format!(
            "import {package_root}.{domain_root}.{child} as {child}\n"
        ));
    }
    let init_path = root.join("__init__.py");
    fs::write(&init_path, content)
        .with_context(|| format!("failed to write {}", init_path.display()))?;
    Ok(())
}

/// Back-fill child imports into every package init below the domain root.
/// Safe to run repeatedly against the same tree: statements already present
/// are never inserted twice.
pub fn add_init_imports(
    outdir: &Path,
    package_root: &str,
    domain_root: &str,
) -> anyhow::Result<()> {
    let root = outdir.join(domain_root);
    for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
        let entry = entry.context("failed to walk generated package tree")?;
        if entry.file_type().is_dir() {
            backfill_dir(entry.path(), outdir, package_root, domain_root)?;
        }
    }
    Ok(())
}

fn backfill_dir(
    dir: &Path,
    outdir: &Path,
    package_root: &str,
    domain_root: &str,
) -> anyhow::Result<()> {
    let rel = dir
        .strip_prefix(outdir)
        .context("package directory escaped the output tree")?;
    let dotted: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let import_path = format!("{package_root}.{}", dotted.join("."));
    let statements: Vec<String> = child_packages(dir)?
        .iter()
        .map(|child| format!("import {import_path}.{child} as {child}\n"))
        .collect();

    let init_path = dir.join("__init__.py");
    let existing = match fs::read_to_string(&init_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read {}", init_path.display()))
        }
    };

    // Untouched directory segment: give it a docstring and the eager child
    // imports, nothing else lives here.
    if existing.is_empty() {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut content = format!("\"\"\"{name} subpackage.\"\"\"\n");
        for statement in &statements {
            content.push_str(statement);
        }
        fs::write(&init_path, content)
            .with_context(|| format!("failed to write {}", init_path.display()))?;
        debug!(path = %init_path.display(), "created package init");
        return Ok(());
    }

    // Init created by a previous back-fill run: docstring plus eager child
    // imports, nothing else. Repeated runs must reproduce it byte for byte,
    // so only statements still missing get appended. The `import typing` line
    // is the discriminator; every walk-written init carries it.
    if !existing.contains("import typing\n") {
        let mut content = existing;
        for statement in &statements {
            if !content.contains(statement.as_str()) {
                content.push_str(statement);
            }
        }
        fs::write(&init_path, content)
            .with_context(|| format!("failed to write {}", init_path.display()))?;
        return Ok(());
    }

    // Init already written by the namespace walk: annotations become lazy via
    // the __future__ import, the domain root is imported under the
    // type-check-only guard, and the eager child imports slot in after
    // `import typing`.
    let mut content = existing;
    if !content.contains(FUTURE_IMPORT) {
        content = insert_after_docstring(&content, FUTURE_IMPORT);
    }
    let guard = format!("if typing.TYPE_CHECKING:\n    import {domain_root}\n");
    let mut block = String::new();
    if !content.contains("if typing.TYPE_CHECKING:") {
        block.push_str(&guard);
    }
    for statement in &statements {
        if !content.contains(statement.as_str()) {
            block.push_str(statement);
        }
    }
    if !block.is_empty() {
        content = content.replacen("import typing\n", &format!("import typing\n{block}"), 1);
    }
    fs::write(&init_path, content)
        .with_context(|| format!("failed to write {}", init_path.display()))?;
    debug!(path = %init_path.display(), "back-filled package init");
    Ok(())
}

/// Insert `line` after the file's leading docstring line, or at the top when
/// the file does not start with one.
fn insert_after_docstring(content: &str, line: &str) -> String {
    match content.split_once('\n') {
        Some((first, rest)) if first.contains('"') => {
            format!("{first}\n{line}{rest}")
        }
        _ => format!("{line}{content}"),
    }
}
