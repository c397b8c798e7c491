//! Typed errors surfaced by the core library

use thiserror::Error;

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported test framework '{0}' (expected one of: mocha, jasmine)")]
    UnsupportedTestFramework(String),

    #[error("Unknown feature '{0}' (expected one of: {1})")]
    UnknownFeature(String, String),

    #[error("Template '{0}' not found in the template library")]
    TemplateNotFound(String),

    #[error("Template '{0}' is not valid UTF-8 text")]
    NotText(String),

    #[error("Failed to render template '{name}': {message}")]
    Render { name: String, message: String },

    #[error("{tool} is not installed. {hint}")]
    ToolMissing { tool: &'static str, hint: &'static str },
}
