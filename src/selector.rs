//! Template selection.
//! Merges the official catalog with registry results into a single ordered
//! candidate list and resolves the user's choice to a template descriptor.

use crate::catalog::{official_templates, TemplateDescriptor};
use crate::context::InitContext;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::registry::TemplateRegistry;

/// A selectable entry in the template list.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub display_name: String,
    pub descriptor: TemplateDescriptor,
}

/// The merged template list for one run.
///
/// Built exactly once before the interactive loop starts; the registry is
/// never queried again, no matter how often the list is filtered.
#[derive(Debug)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
}

impl CandidateList {
    /// Builds the list: official templates in catalog order, then registry
    /// results labeled with their popularity.
    pub fn load(registry: &dyn TemplateRegistry) -> Self {
        let mut candidates: Vec<Candidate> = official_templates()
            .into_iter()
            .map(|descriptor| Candidate {
                display_name: format!("{} official", descriptor.name),
                descriptor,
            })
            .collect();

        candidates.extend(registry.search().into_iter().map(|template| Candidate {
            display_name: format!(
                "{} {}⭑",
                template.descriptor.name, template.stars
            ),
            descriptor: template.descriptor,
        }));

        Self { candidates }
    }

    /// Case-insensitive substring filter over display names. An empty
    /// filter returns the full list.
    pub fn filter(&self, input: &str) -> Vec<&Candidate> {
        let needle = input.to_lowercase();
        self.candidates
            .iter()
            .filter(|candidate| {
                needle.is_empty()
                    || candidate.display_name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Resolves a non-interactive template filter.
    ///
    /// An exact name match wins; otherwise the substring filter must name
    /// exactly one candidate. A filter matching nothing is an error rather
    /// than a silent selection.
    pub fn resolve(&self, filter: &str) -> Result<&Candidate> {
        if let Some(exact) = self
            .candidates
            .iter()
            .find(|candidate| candidate.descriptor.name.eq_ignore_ascii_case(filter))
        {
            return Ok(exact);
        }

        let matches = self.filter(filter);
        match matches.as_slice() {
            [] => Err(Error::TemplateNotFoundError { template: filter.to_string() }),
            [only] => Ok(*only),
            _ => Err(Error::TemplateError(format!(
                "template '{}' is ambiguous, matches: {}",
                filter,
                matches
                    .iter()
                    .map(|candidate| candidate.descriptor.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    pub fn display_names(&self) -> Vec<String> {
        self.candidates.iter().map(|candidate| candidate.display_name.clone()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Resolves the user's template choice and records it in the context.
///
/// With `template_filter` set the choice is resolved without prompting.
/// Otherwise the candidate list is presented interactively with
/// incremental filtering; dismissing the prompt terminates the workflow.
/// If the context has no project name yet, the selected template's name is
/// adopted.
pub fn select_template(
    prompt: &dyn Prompter,
    candidates: &CandidateList,
    context: &mut InitContext,
    template_filter: Option<&str>,
) -> Result<TemplateDescriptor> {
    let candidate = match template_filter {
        Some(filter) => candidates.resolve(filter)?,
        None => {
            let items = candidates.display_names();
            let index = prompt.select("Select a template to init", &items)?;
            candidates.get(index).ok_or_else(|| {
                Error::TemplateError(format!("selection {index} is out of range"))
            })?
        }
    };

    if context.name.is_none() {
        context.name = Some(candidate.descriptor.name.clone());
    }
    context.template = Some(candidate.descriptor.clone());

    Ok(candidate.descriptor.clone())
}
