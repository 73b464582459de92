//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::{Confirm, FuzzySelect};

/// Trait for interactive prompts.
///
/// The workflow talks to the terminal through this interface so selection
/// and confirmation logic can be driven without a TTY in tests.
pub trait Prompter {
    /// Asks a yes/no question with a `No` default; `skip` short-circuits
    /// to `yes` without prompting.
    fn confirm(&self, skip: bool, question: String) -> Result<bool>;

    /// Lets the user pick one item, narrowing the list as they type.
    /// Returns the index of the chosen item; dismissing the prompt is
    /// reported as `Error::Aborted`.
    fn select(&self, question: &str, items: &[String]) -> Result<usize>;
}

/// Dialoguer-backed prompter used by the binary.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, question: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(question).default(false).interact()?)
    }

    fn select(&self, question: &str, items: &[String]) -> Result<usize> {
        FuzzySelect::new()
            .with_prompt(question)
            .items(items)
            .default(0)
            .interact_opt()?
            .ok_or(Error::Aborted)
    }
}
