//! Kiln's main application entry point and orchestration logic.
//! Handles command-line argument parsing and drives the init pipeline:
//! template selection, output directory validation, materialization,
//! metadata rendering, dependency installation and post-init hooks.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use console::style;
use indicatif::ProgressBar;
use kiln::{
    cli::{get_args, Args},
    context::InitContext,
    error::{default_error_handler, Error, Result},
    hooks::execute_init_hooks,
    logger::init_logger,
    materializer::materialize,
    metadata::render_metadata,
    packager::get_packager,
    prompt::{DialoguerPrompter, Prompter},
    registry::GithubRegistry,
    renderer::MiniJinjaRenderer,
    selector::{select_template, CandidateList},
};

/// Outcome of a completed init run, reported by the entry point.
struct InitSummary {
    name: String,
    output_dir: PathBuf,
}

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(summary) => {
            println!(
                "{} Initialized \"{}\" in {}.",
                style("Success!").green().bold(),
                summary.name,
                style(summary.output_dir.display()).blue().bold()
            );
        }
        Err(err) => default_error_handler(err),
    }
}

/// Validates the destination directory, asking before overwriting an
/// existing one.
///
/// A declined overwrite terminates the run with nothing written; a
/// confirmed one clears the directory so materialization starts clean.
fn check_output_dir(prompt: &dyn Prompter, output_dir: &Path, skip: bool) -> Result<()> {
    if output_dir.exists() {
        let overwrite = prompt.confirm(
            skip,
            format!("'{}' already exists. Overwrite it?", output_dir.display()),
        )?;
        if !overwrite {
            return Err(Error::Aborted);
        }
        fs::remove_dir_all(output_dir)?;
    }
    Ok(())
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the candidate list (catalog + registry, queried once)
/// 2. Resolves the user's template choice
/// 3. Validates the output directory
/// 4. Materializes the template (copy or shallow clone)
/// 5. Rewrites the package metadata with the project name
/// 6. Installs dependencies with the project's declared package manager
/// 7. Runs the project's init hooks
fn run(args: Args) -> Result<InitSummary> {
    let renderer = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();
    let registry = GithubRegistry::new();

    let mut context = InitContext::new(args.name, args.output_dir);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("loading templates...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let candidates = CandidateList::load(&registry);
    spinner.finish_and_clear();

    let descriptor =
        select_template(&prompt, &candidates, &mut context, args.template.as_deref())?;

    let output_dir = context.resolved_output_dir()?;
    check_output_dir(&prompt, &output_dir, args.yes)?;

    materialize(&renderer, &descriptor, &output_dir)?;
    render_metadata(&output_dir, context.name())?;

    let cli_context = context.cli_context()?;
    get_packager(&cli_context.packager).install(&output_dir)?;
    execute_init_hooks(cli_context)?;

    Ok(InitSummary { name: context.name().to_string(), output_dir })
}
