//! Session state for a single init run.

use crate::catalog::TemplateDescriptor;
use crate::constants::{CONFIG_KEY, PACKAGE_DESCRIPTOR};
use crate::error::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Mutable state accumulated while the init workflow runs.
///
/// The project name may only become known after template selection, so the
/// resolved output directory is recomputed from this context whenever it
/// is referenced instead of being cached up front.
#[derive(Debug, Default)]
pub struct InitContext {
    pub name: Option<String>,
    pub output_dir: PathBuf,
    pub template: Option<TemplateDescriptor>,
    cli: Option<CliContext>,
}

impl InitContext {
    pub fn new(name: Option<String>, output_dir: PathBuf) -> Self {
        Self { name, output_dir, template: None, cli: None }
    }

    /// Project name, once supplied by the user or adopted from the
    /// selected template.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Resolved destination directory:
    /// `current_dir / output_dir / name`, recomputed on every call.
    pub fn resolved_output_dir(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(resolve_output_dir(&cwd, &self.output_dir, self.name()))
    }

    /// Lazily creates the CLI context handed to the install and hook
    /// stages. Created at most once per run.
    pub fn cli_context(&mut self) -> Result<&CliContext> {
        if self.cli.is_none() {
            let output_dir = self.resolved_output_dir()?;
            let mut cli = CliContext::create(&output_dir)?;
            cli.name = self.name().to_string();
            self.cli = Some(cli);
        }
        Ok(self.cli.as_ref().unwrap())
    }
}

/// Joins the destination directory from its parts. Pure; relative
/// components resolve against `cwd`.
pub fn resolve_output_dir(cwd: &Path, output_dir: &Path, name: &str) -> PathBuf {
    cwd.join(output_dir).join(name)
}

/// Shared configuration bound to the generated project, consumed by the
/// package-manager and hook stages.
#[derive(Debug)]
pub struct CliContext {
    pub name: String,
    pub output_dir: PathBuf,
    pub packager: String,
}

impl CliContext {
    /// Reads the `kiln.packager` field of the generated project's package
    /// descriptor to determine the package manager. Projects that declare
    /// none get npm.
    pub fn create(output_dir: &Path) -> Result<Self> {
        let descriptor_path = output_dir.join(PACKAGE_DESCRIPTOR);
        let packager = match std::fs::read_to_string(&descriptor_path) {
            Ok(raw) => serde_json::from_str::<serde_json::Value>(&raw)?
                .get(CONFIG_KEY)
                .and_then(|config| config.get("packager"))
                .and_then(|value| value.as_str())
                .unwrap_or("npm")
                .to_string(),
            Err(err) => {
                debug!(
                    "No readable package descriptor in '{}' ({err}), defaulting to npm.",
                    output_dir.display()
                );
                "npm".to_string()
            }
        };

        Ok(Self {
            name: String::new(),
            output_dir: output_dir.to_path_buf(),
            packager,
        })
    }
}
