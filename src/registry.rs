//! Remote template discovery via a repository-search endpoint.
//!
//! Discovery is best-effort: a timeout, network error, non-success status
//! or malformed body all degrade to an empty result so the selector can
//! still offer the official catalog.

use crate::catalog::TemplateDescriptor;
use crate::constants::{REGISTRY_TIMEOUT, REGISTRY_USER_AGENT, SEARCH_TEMPLATE_REPO_URI};
use log::debug;
use serde::Deserialize;

/// One repository entry in the search response.
#[derive(Debug, Deserialize)]
pub struct RepoItem {
    pub name: String,
    pub stargazers_count: u64,
    pub clone_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<RepoItem>,
}

/// A community template together with its popularity count.
#[derive(Debug)]
pub struct RegistryTemplate {
    pub descriptor: TemplateDescriptor,
    pub stars: u64,
}

impl From<RepoItem> for RegistryTemplate {
    fn from(item: RepoItem) -> Self {
        Self {
            stars: item.stargazers_count,
            descriptor: TemplateDescriptor::new(item.name, item.clone_url),
        }
    }
}

/// A searchable source of community templates.
pub trait TemplateRegistry {
    /// Returns the discovered templates, most popular first. Best-effort:
    /// failures yield an empty list.
    fn search(&self) -> Vec<RegistryTemplate>;
}

/// Registry client backed by the GitHub repository search API, filtered by
/// the kiln template topic.
pub struct GithubRegistry {
    endpoint: String,
}

impl GithubRegistry {
    pub fn new() -> Self {
        Self { endpoint: SEARCH_TEMPLATE_REPO_URI.to_string() }
    }

    /// Overrides the search endpoint.
    pub fn with_endpoint<S: Into<String>>(endpoint: S) -> Self {
        Self { endpoint: endpoint.into() }
    }

    fn try_search(&self) -> reqwest::Result<Vec<RegistryTemplate>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REGISTRY_TIMEOUT)
            .build()?;
        let response = client
            .get(&self.endpoint)
            .header(reqwest::header::USER_AGENT, REGISTRY_USER_AGENT)
            .send()?
            .error_for_status()?;
        let body: SearchResponse = response.json()?;
        Ok(body.items.into_iter().map(RegistryTemplate::from).collect())
    }
}

impl Default for GithubRegistry {
    fn default() -> Self {
        GithubRegistry::new()
    }
}

impl TemplateRegistry for GithubRegistry {
    fn search(&self) -> Vec<RegistryTemplate> {
        match self.try_search() {
            Ok(templates) => templates,
            Err(err) => {
                debug!("Template registry unavailable: {err}");
                Vec::new()
            }
        }
    }
}
