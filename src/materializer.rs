//! Template materialization.
//! Produces the on-disk project skeleton from a resolved template
//! descriptor: local locations are copied recursively, remote locations
//! are shallow-cloned. Both branches run to completion before the next
//! workflow stage starts.

use crate::catalog::{templates_root, TemplateDescriptor};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Materializes `descriptor` into `output_dir`.
pub fn materialize(
    renderer: &dyn TemplateRenderer,
    descriptor: &TemplateDescriptor,
    output_dir: &Path,
) -> Result<()> {
    if descriptor.is_remote() {
        clone_remote_template(&descriptor.location, output_dir)
    } else {
        let source = resolve_location(renderer, &descriptor.location)?;
        copy_local_template(&source, output_dir)
    }
}

/// Renders the `{{ templates }}` placeholder in a catalog location against
/// the installed template root.
fn resolve_location(
    renderer: &dyn TemplateRenderer,
    location: &str,
) -> Result<PathBuf> {
    let context = serde_json::json!({
        "templates": templates_root().display().to_string(),
    });
    let rendered = renderer.render(location, &context)?;
    Ok(PathBuf::from(rendered))
}

/// Recursively copies the template tree into `output_dir`, preserving
/// relative paths.
fn copy_local_template(source: &Path, output_dir: &Path) -> Result<()> {
    if !source.exists() {
        return Err(Error::TemplateError(format!(
            "template path '{}' does not exist",
            source.display()
        )));
    }

    debug!("Copying template from '{}'.", source.display());

    for dir_entry in WalkDir::new(source) {
        let entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let target = output_dir.join(relative_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Shallow-clones the repository, depth 1, straight into `output_dir`.
///
/// Runs to completion before returning; a failed fetch surfaces as the
/// call's error.
fn clone_remote_template(location: &str, output_dir: &Path) -> Result<()> {
    debug!("Cloning repository '{}'.", location);

    let mut fetch_opts = git2::FetchOptions::new();
    fetch_opts.depth(1);

    let mut builder = git2::build::RepoBuilder::new();
    builder.fetch_options(fetch_opts);

    builder.clone(location, output_dir)?;
    Ok(())
}
