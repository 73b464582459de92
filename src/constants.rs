//! Common constants used throughout the kiln application.

use std::time::Duration;

/// Placeholder token in catalog locations, substituted with the installed
/// template root
pub const TEMPLATES_PLACEHOLDER: &str = "{{ templates }}";

/// Repository-search endpoint for community templates
pub const SEARCH_TEMPLATE_REPO_URI: &str =
    "https://api.github.com/search/repositories?q=topic:kiln-template&sort=stars&order=desc";

/// Client identifier sent with every registry request
pub const REGISTRY_USER_AGENT: &str = "Kiln CLI";

/// Registry request timeout
pub const REGISTRY_TIMEOUT: Duration = Duration::from_millis(5000);

/// The generated project's package descriptor file
pub const PACKAGE_DESCRIPTOR: &str = "package.json";

/// Top-level key of kiln's per-project configuration inside the descriptor
pub const CONFIG_KEY: &str = "kiln";

/// Directory of post-init hook scripts inside a generated project
pub const INIT_HOOKS_DIR: &str = "hooks/init.d";

/// Environment variable overriding the installed template root
pub const TEMPLATES_DIR_ENV: &str = "KILN_TEMPLATES_DIR";
