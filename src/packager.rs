//! Package manager abstraction for installing the generated project's
//! dependencies. The manager is selected by the project's own declared
//! configuration, not by kiln's.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Installs dependencies for a generated project.
pub trait Packager {
    /// The executable this packager shells out to.
    fn command(&self) -> &'static str;

    /// Runs the packager's install against `target_dir` with inherited
    /// standard streams so the user sees native installer output.
    fn install(&self, target_dir: &Path) -> Result<()> {
        debug!("Installing dependencies with '{}'.", self.command());

        let status = Command::new(self.command())
            .arg("install")
            .current_dir(target_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::InstallError(format!(
                "'{} install' failed with status: {}",
                self.command(),
                status
            )));
        }

        Ok(())
    }
}

pub struct NpmPackager;
pub struct YarnPackager;
pub struct PnpmPackager;

impl Packager for NpmPackager {
    fn command(&self) -> &'static str {
        "npm"
    }
}

impl Packager for YarnPackager {
    fn command(&self) -> &'static str {
        "yarn"
    }
}

impl Packager for PnpmPackager {
    fn command(&self) -> &'static str {
        "pnpm"
    }
}

/// Resolves a packager implementation from its identifier. Unknown
/// identifiers fall back to npm.
pub fn get_packager(id: &str) -> Box<dyn Packager> {
    match id {
        "yarn" => Box::new(YarnPackager),
        "pnpm" => Box::new(PnpmPackager),
        _ => Box::new(NpmPackager),
    }
}
