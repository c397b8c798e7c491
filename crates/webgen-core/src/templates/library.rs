//! Template library loading, from the embedded copy or a local directory
//!
//! The embedded library is what ships with the binary. A local directory with
//! the same layout (a `template.yaml` plus template files) replaces it, which
//! is how template changes are tried out without rebuilding.

use super::embedded;
use super::manifest::TemplateManifest;
use super::renderer::RenderContext;
use crate::error::Error;
use anyhow::{Context, Result};
use semver::Version;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a local template library
pub const TEMPLATE_DIR_ENV: &str = "WEBGEN_TEMPLATE_DIR";

/// Where templates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    Local(PathBuf),
}

impl TemplateSource {
    /// Explicit directory first, then `WEBGEN_TEMPLATE_DIR`, then the embedded library
    pub fn resolve(template_dir: Option<PathBuf>) -> Self {
        template_dir
            .or_else(|| {
                std::env::var(TEMPLATE_DIR_ENV)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .map(Self::Local)
            .unwrap_or(Self::Embedded)
    }
}

/// The library was written for a newer webgen than the one running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    pub required: Version,
    pub running: Version,
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "these templates need webgen {} or newer, you are running {}",
            self.required, self.running
        )
    }
}

/// Semver with an optional leading `v`. Anything else is not compared.
fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    Version::parse(version.strip_prefix('v').unwrap_or(version)).ok()
}

/// A loaded set of templates keyed by id (path relative to the library root)
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    source: TemplateSource,
    manifest: TemplateManifest,
    files: HashMap<String, Vec<u8>>,
}

impl TemplateLibrary {
    /// Load templates from a source
    pub fn load(source: &TemplateSource) -> Result<Self> {
        match source {
            TemplateSource::Embedded => Self::embedded(),
            TemplateSource::Local(path) => Self::from_local(path),
        }
    }

    /// The library compiled into the binary
    pub fn embedded() -> Result<Self> {
        let manifest: TemplateManifest = serde_yaml::from_str(embedded::MANIFEST)
            .context("Failed to parse embedded template.yaml")?;
        let files = embedded::FILES
            .iter()
            .map(|(id, content)| (id.to_string(), content.to_vec()))
            .collect();

        Ok(Self {
            source: TemplateSource::Embedded,
            manifest,
            files,
        })
    }

    /// Read every file under a local template directory
    pub fn from_local(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            anyhow::bail!("Template directory not found: {}", path.display());
        }

        let manifest_path = path.join("template.yaml");
        let manifest_content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let manifest: TemplateManifest = serde_yaml::from_str(&manifest_content)
            .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

        let mut files = HashMap::new();
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(path)
                .with_context(|| format!("{} is outside the template directory", entry.path().display()))?;
            let id = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if id == "template.yaml" {
                continue;
            }

            let content = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            files.insert(id, content);
        }

        Ok(Self {
            source: TemplateSource::Local(path.to_path_buf()),
            manifest,
            files,
        })
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    pub fn manifest(&self) -> &TemplateManifest {
        &self.manifest
    }

    /// Compare the library's declared version against the running CLI
    pub fn version_mismatch(&self, cli_version: &str) -> Option<VersionMismatch> {
        let running = parse_version(cli_version)?;
        let required = parse_version(&self.manifest.version)?;
        (running < required).then_some(VersionMismatch { required, running })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.files.contains_key(id)
    }

    /// Raw bytes of a template
    pub fn get(&self, id: &str) -> Result<&[u8], Error> {
        self.files
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::TemplateNotFound(id.to_string()))
    }

    /// Render a text template against a context
    pub fn render(&self, id: &str, context: &RenderContext) -> Result<String, Error> {
        let bytes = self.get(id)?;
        let text = std::str::from_utf8(bytes).map_err(|_| Error::NotText(id.to_string()))?;
        context.render_str(id, text)
    }
}
