//! Front-end dependency manifest (`bower.json`) assembly

use crate::options::{Feature, Options};
use crate::resolve::{BootstrapVariant, ResolvedConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;

pub const BOOTSTRAP4_VERSION: &str = "~4.0.0-alpha.6";
pub const BOOTSTRAP3_VERSION: &str = "~3.3.6";
pub const JQUERY_VERSION: &str = "~2.1.1";
pub const MODERNIZR_VERSION: &str = "~2.8.1";
pub const FASTCLICK_VERSION: &str = "~1.0.6";
pub const VIEWPORT_FIX_VERSION: &str = "~0.6.1";
pub const NORMALIZE_VERSION: &str = "~3.0.2";

const BOOTSTRAP_SASS_MAIN: &[&str] = &[
    "assets/stylesheets/_bootstrap.scss",
    "assets/fonts/bootstrap/*",
    "assets/javascripts/bootstrap.js",
];

const BOOTSTRAP3_MAIN: &[&str] = &[
    "less/bootstrap.less",
    "dist/css/bootstrap.css",
    "dist/js/bootstrap.js",
    "dist/fonts/*",
];

/// File name of the manifest in the project root
pub const BOWER_JSON: &str = "bower.json";

/// `bower.json`: package → version constraint, plus optional entry-point
/// overrides. Entries keep insertion order, which is also their injection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManifest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub dependencies: Map<String, Value>,

    /// Package → `{ "main": [...] }` for packages whose own `main` is unsuitable
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub overrides: Map<String, Value>,
}

impl DependencyManifest {
    fn new(name: String) -> Self {
        Self {
            name,
            private: true,
            dependencies: Map::new(),
            overrides: Map::new(),
        }
    }

    /// Replace the whole dependency set with a single foundation package
    fn replace_with(&mut self, package: &str, version: &str, main: Option<&[&str]>) {
        self.dependencies = Map::new();
        self.dependencies
            .insert(package.to_string(), Value::from(version));

        self.overrides = Map::new();
        if let Some(files) = main {
            self.overrides
                .insert(package.to_string(), json!({ "main": files }));
        }
    }

    fn add(&mut self, package: &str, version: &str) {
        self.dependencies
            .insert(package.to_string(), Value::from(version));
    }

    /// Version constraint for a package, if declared
    pub fn get(&self, package: &str) -> Option<&str> {
        self.dependencies.get(package).and_then(Value::as_str)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }

    pub fn package_names(&self) -> Vec<&str> {
        self.dependencies.keys().map(String::as_str).collect()
    }

    /// Override entry points for a package. `main` may be a string or a list.
    pub fn override_for(&self, package: &str) -> Option<Vec<String>> {
        match self.overrides.get(package)?.get("main")? {
            Value::String(file) => Some(vec![file.clone()]),
            Value::Array(files) => Some(
                files
                    .iter()
                    .filter_map(|f| f.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Pretty-printed `bower.json` contents with a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut text =
            serde_json::to_string_pretty(self).context("Failed to serialize bower.json")?;
        text.push('\n');
        Ok(text)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse bower.json")
    }

    /// Read the manifest back from a generated project, including any edits
    /// made to it since generation
    pub fn read(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(BOWER_JSON);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("Invalid {}", path.display()))
    }
}

/// Decide the project's front-end dependencies. Total and pure.
pub fn assemble(options: &Options, resolved: &ResolvedConfig) -> DependencyManifest {
    let mut manifest = DependencyManifest::new(options.slug());

    // Bootstrap variants are alternate foundations: each replaces the set.
    match resolved.bootstrap {
        BootstrapVariant::V4 => manifest.replace_with("bootstrap", BOOTSTRAP4_VERSION, None),
        BootstrapVariant::V3 { sass_flavor: true } => manifest.replace_with(
            "bootstrap-sass",
            BOOTSTRAP3_VERSION,
            Some(BOOTSTRAP_SASS_MAIN),
        ),
        BootstrapVariant::V3 { sass_flavor: false } => {
            manifest.replace_with("bootstrap", BOOTSTRAP3_VERSION, Some(BOOTSTRAP3_MAIN))
        }
        BootstrapVariant::None => {
            if options.include_jquery {
                manifest.add("jquery", JQUERY_VERSION);
            }
        }
    }

    if options.has(Feature::Modernizr) {
        manifest.add("modernizr", MODERNIZR_VERSION);
    }

    if options.has(Feature::Fastclick) {
        manifest.add("fastclick", FASTCLICK_VERSION);
    }

    if options.has(Feature::ViewportFix) {
        manifest.add("viewport-units-buggyfill", VIEWPORT_FIX_VERSION);
    }

    if !resolved.bootstrap.is_selected() {
        manifest.add("normalize-css", NORMALIZE_VERSION);
    }

    manifest
}
