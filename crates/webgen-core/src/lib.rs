//! Webgen Core - Library behind the `webgen` front-end project generator
//!
//! Given a handful of answers (features, Bootstrap version, jQuery, names), the
//! library decides which variants apply, assembles the front-end dependency
//! manifest, renders the project from templates, installs dependencies and
//! wires them into the generated markup.
//!
//! # Architecture
//!
//! The pipeline runs in stages, each a plain function over the previous stage's
//! output:
//!
//! - **Intake** - [`Options`], collected once and never mutated
//! - **Resolve** - [`resolve`] picks extensions and the Bootstrap variant
//! - **Assemble** - [`assemble`] builds the `bower.json` [`DependencyManifest`]
//! - **Emit** - [`emit`] plans and writes the project files
//! - **Install** - [`install`] runs yarn and bower
//! - **Inject** - [`inject`] fills the dependency marker blocks
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and the [`run`] entry point
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use webgen_core::{assemble, resolve, Feature, Options};
//!
//! let options = Options::new(
//!     [Feature::Sass, Feature::Bootstrap].into(),
//!     false,
//!     false,
//!     "site".into(),
//!     "My Site".into(),
//!     "Jane".into(),
//! );
//! let resolved = resolve(&options);
//! let manifest = assemble(&options, &resolved);
//! println!("{}", manifest.to_json_string()?);
//! ```

pub mod emit;
pub mod error;
pub mod inject;
pub mod install;
pub mod manifest;
pub mod options;
pub mod resolve;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::Error;
pub use manifest::{assemble, DependencyManifest};
pub use options::{Feature, Options, TestFramework};
pub use resolve::{resolve, BootstrapVariant, MarkupExtension, ResolvedConfig, StyleExtension};
pub use templates::{RenderContext, TemplateLibrary, TemplateManifest, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;

/// Generator name, as shown in banners and generated file headers
pub const GENERATOR_NAME: &str = "webgen";

/// Library version - used for template compatibility checking
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
