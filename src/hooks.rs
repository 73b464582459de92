use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::INIT_HOOKS_DIR;
use crate::context::CliContext;
use crate::error::{Error, Result};
use log::debug;

/// Returns the init hook scripts of a generated project, in lexical order.
/// A project without a hooks directory has no hooks.
pub fn get_init_hooks<P: AsRef<Path>>(project_dir: P) -> Result<Vec<PathBuf>> {
    let hooks_dir = project_dir.as_ref().join(INIT_HOOKS_DIR);
    if !hooks_dir.exists() {
        return Ok(Vec::new());
    }

    let mut hooks: Vec<PathBuf> = std::fs::read_dir(&hooks_dir)?
        .filter_map(|dir_entry| dir_entry.ok())
        .map(|dir_entry| dir_entry.path())
        .filter(|path| path.is_file())
        .collect();
    hooks.sort();

    Ok(hooks)
}

/// Runs all init hooks sequentially against the generated project.
///
/// The process working directory is switched to the project before the
/// first hook runs; hooks inherit the standard streams and receive the
/// project name and location through the environment. The first failing
/// hook aborts the run. No rollback is attempted.
pub fn execute_init_hooks(context: &CliContext) -> Result<()> {
    std::env::set_current_dir(&context.output_dir)?;

    for hook in get_init_hooks(&context.output_dir)? {
        debug!("Running init hook '{}'.", hook.display());

        let status = Command::new(&hook)
            .current_dir(&context.output_dir)
            .env("KILN_PROJECT_NAME", &context.name)
            .env("KILN_OUTPUT_DIR", &context.output_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::HookError(format!(
                "Hook '{}' failed with status: {}",
                hook.display(),
                status
            )));
        }
    }

    Ok(())
}
