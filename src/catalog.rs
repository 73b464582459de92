//! Built-in template catalog.
//! A static, ordered mapping from template name to the location it can be
//! materialized from.

use crate::constants::{TEMPLATES_DIR_ENV, TEMPLATES_PLACEHOLDER};
use indexmap::IndexMap;
use std::path::PathBuf;
use url::Url;

/// A template name paired with its location.
///
/// The location is either a filesystem pattern containing the
/// `{{ templates }}` placeholder or a remote git URL. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub name: String,
    pub location: String,
}

impl TemplateDescriptor {
    pub fn new<N: Into<String>, L: Into<String>>(name: N, location: L) -> Self {
        Self { name: name.into(), location: location.into() }
    }

    /// Whether materializing this template clones a remote repository
    /// rather than copying a local tree.
    pub fn is_remote(&self) -> bool {
        Url::parse(&self.location)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

impl std::fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' from '{}'", self.name, self.location)
    }
}

/// Official templates shipped with the CLI, in catalog order.
pub fn official_templates() -> Vec<TemplateDescriptor> {
    let catalog: IndexMap<&str, String> = IndexMap::from([
        ("hello-world", format!("{TEMPLATES_PLACEHOLDER}/hello-world")),
        ("backend-app", format!("{TEMPLATES_PLACEHOLDER}/backend-app")),
        ("web-app", format!("{TEMPLATES_PLACEHOLDER}/web-app")),
        ("serverless-app", format!("{TEMPLATES_PLACEHOLDER}/serverless-app")),
        ("monorepo-app", "https://github.com/kiln-cli/monorepo-app.git".to_string()),
    ]);

    catalog
        .into_iter()
        .map(|(name, location)| TemplateDescriptor::new(name, location))
        .collect()
}

/// Root directory of the templates installed alongside the CLI.
///
/// `KILN_TEMPLATES_DIR` overrides the lookup next to the executable.
pub fn templates_root() -> PathBuf {
    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|bin_dir| bin_dir.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}
