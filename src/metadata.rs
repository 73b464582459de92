//! Package metadata rendering for generated projects.

use crate::constants::PACKAGE_DESCRIPTOR;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Rewrites the generated project's package descriptor in place, injecting
/// the resolved project name.
///
/// Every other field keeps its value and position; the file is written
/// back with 2-space indentation. A missing or malformed descriptor is
/// fatal.
pub fn render_metadata(output_dir: &Path, name: &str) -> Result<()> {
    let descriptor_path = output_dir.join(PACKAGE_DESCRIPTOR);
    debug!("Rendering metadata in '{}'.", descriptor_path.display());

    let raw = fs::read_to_string(&descriptor_path)?;
    let mut descriptor: serde_json::Value = serde_json::from_str(&raw)?;

    let fields = descriptor.as_object_mut().ok_or_else(|| {
        Error::ConfigError(format!(
            "'{}' is not a JSON object",
            descriptor_path.display()
        ))
    })?;
    fields.insert("name".to_string(), serde_json::Value::String(name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&descriptor)?;
    rendered.push('\n');
    fs::write(&descriptor_path, rendered)?;

    Ok(())
}
