//! Kiln is a project-scaffolding CLI.
//! It materializes starter templates from a built-in catalog or a remote
//! template registry, rewrites the generated package metadata, installs
//! dependencies and runs post-init hooks against the new project.

/// Built-in template catalog and descriptor types
pub mod catalog;

/// Command-line interface module for the kiln binary
pub mod cli;

/// Common constants used across the application
pub mod constants;

/// Session state shared between workflow stages
pub mod context;

/// Error types and handling for the kiln application
pub mod error;

/// Post-init hook execution
/// Runs the scripts in the generated project's hooks/init.d
pub mod hooks;

/// Logger configuration
pub mod logger;

/// Template materialization
/// Copies local templates or shallow-clones remote ones
pub mod materializer;

/// Package descriptor rewriting for generated projects
pub mod metadata;

/// Package manager abstraction used for dependency installation
pub mod packager;

/// User input and interaction handling
pub mod prompt;

/// Remote template registry client
pub mod registry;

/// Location rendering for catalog templates
pub mod renderer;

/// Template selection and the merged candidate list
pub mod selector;
