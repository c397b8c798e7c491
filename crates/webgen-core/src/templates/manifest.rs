//! Template library metadata (`template.yaml`)

use serde::{Deserialize, Serialize};

/// Root manifest of a template library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the library
    pub name: String,

    /// Description of what the generated project contains
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::embedded;

    #[test]
    fn test_parse_manifest() {
        let manifest: TemplateManifest =
            serde_yaml::from_str("name: webapp\ndescription: test\nversion: 0.1.0\n").unwrap();
        assert_eq!(manifest.name, "webapp");
        assert_eq!(manifest.version, "0.1.0");
    }

    #[test]
    fn test_embedded_manifest_parses() {
        let manifest: TemplateManifest = serde_yaml::from_str(embedded::MANIFEST).unwrap();
        assert_eq!(manifest.name, "webapp");
        assert!(semver::Version::parse(&manifest.version).is_ok());
    }
}
