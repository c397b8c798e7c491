//! Boilerplate template library and rendering
//!
//! This module provides:
//! - The template library (embedded in the binary, or a local override directory)
//! - Library metadata (`template.yaml`) and version compatibility checking
//! - The flat render context every template is rendered against

pub mod embedded;
pub mod library;
pub mod manifest;
pub mod renderer;

pub use library::{TemplateLibrary, TemplateSource, VersionMismatch, TEMPLATE_DIR_ENV};
pub use manifest::TemplateManifest;
pub use renderer::RenderContext;
