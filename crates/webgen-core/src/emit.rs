//! Project emission: which files a run produces and writing them to disk

use crate::manifest::DependencyManifest;
use crate::options::{Options, TestFramework};
use crate::resolve::{MarkupExtension, ResolvedConfig, StyleExtension};
use crate::templates::{RenderContext, TemplateLibrary};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Sass partials imported by `main.scss`
const SASS_MODULES: &[&str] = &["fonts", "mixins", "styles", "variables"];

/// Pug partials used by the default layout
const PUG_MODULES: &[&str] = &[
    "_includes/config",
    "_includes/head",
    "_includes/header",
    "_includes/footer",
    "_includes/mixins",
    "_includes/foot-scripts",
    "_layouts/default",
    "_mixins/example",
    "_modules/example",
];

/// Directories created empty for the user to fill
const EMPTY_DIRS: &[&str] = &["app/images", "app/fonts"];

/// How an artifact's contents are produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Rendered through Tera
    Render(String),
    /// Copied byte for byte
    Copy(&'static str),
    /// Serialized from the assembled dependency manifest
    BowerManifest,
}

/// One output file, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub source: ArtifactSource,
    pub destination: String,
}

impl Artifact {
    fn render(template: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: ArtifactSource::Render(template.into()),
            destination: destination.into(),
        }
    }

    fn copy(template: &'static str, destination: &str) -> Self {
        Self {
            source: ArtifactSource::Copy(template),
            destination: destination.to_string(),
        }
    }
}

/// Files contributed by the test framework
pub fn test_harness(framework: TestFramework) -> Vec<Artifact> {
    let dir = format!("test/{}", framework.name());
    vec![
        Artifact::render(format!("{}/index.html", dir), "test/index.html"),
        Artifact::render(format!("{}/test.js", dir), "test/spec/test.js"),
        Artifact::render(format!("{}/bower.json", dir), "test/bower.json"),
    ]
}

/// List every file a run writes, in write order
pub fn plan(options: &Options, resolved: &ResolvedConfig) -> Vec<Artifact> {
    let mut artifacts = vec![
        Artifact::render("gulpfile.js", "gulpfile.js"),
        Artifact::render("_package.json", "package.json"),
        Artifact::copy("babelrc", ".babelrc"),
        Artifact::copy("gitignore", ".gitignore"),
        Artifact::copy("gitattributes", ".gitattributes"),
        Artifact {
            source: ArtifactSource::BowerManifest,
            destination: "bower.json".to_string(),
        },
        Artifact::copy("bowerrc", ".bowerrc"),
        Artifact::copy("editorconfig", ".editorconfig"),
        Artifact::copy("favicon.ico", "app/favicon.ico"),
        Artifact::copy("apple-touch-icon.png", "app/apple-touch-icon.png"),
        Artifact::copy("robots.txt", "app/robots.txt"),
    ];

    let stylesheet = format!("main.{}", resolved.style_extension.as_str());
    artifacts.push(Artifact::render(
        stylesheet.clone(),
        format!("app/styles/{}", stylesheet),
    ));

    if resolved.style_extension == StyleExtension::Scss {
        for module in SASS_MODULES {
            artifacts.push(Artifact::render(
                format!("styles/{}.scss", module),
                format!("app/styles/{}.scss", module),
            ));
        }
    }

    artifacts.push(Artifact::render("main.js", "app/scripts/main.js"));

    let index = format!("index.{}", resolved.markup_extension.as_str());
    artifacts.push(Artifact::render(index.clone(), format!("app/{}", index)));

    if resolved.markup_extension == MarkupExtension::Pug {
        for module in PUG_MODULES {
            artifacts.push(Artifact::render(
                format!("{}.pug", module),
                format!("app/{}.pug", module),
            ));
        }
    }

    artifacts.extend(test_harness(options.test_framework));
    artifacts
}

/// Write a planned project under `target_dir`. Returns the relative paths written.
pub async fn write_project(
    library: &TemplateLibrary,
    context: &RenderContext,
    manifest: &DependencyManifest,
    artifacts: &[Artifact],
    target_dir: &Path,
) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let content = match &artifact.source {
            ArtifactSource::Render(template) => library.render(template, context)?.into_bytes(),
            ArtifactSource::Copy(template) => library.get(template)?.to_vec(),
            ArtifactSource::BowerManifest => manifest.to_json_string()?.into_bytes(),
        };

        let target_path = target_dir.join(&artifact.destination);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, &content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        written.push(artifact.destination.clone());
    }

    for dir in EMPTY_DIRS {
        let path = target_dir.join(dir);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::assemble;
    use crate::options::Feature;
    use crate::resolve::resolve;
    use std::collections::BTreeSet;

    fn options(features: &[Feature], legacy_bootstrap: bool, include_jquery: bool) -> Options {
        Options::new(
            features.iter().copied().collect::<BTreeSet<_>>(),
            legacy_bootstrap,
            include_jquery,
            "demo",
            "Demo App",
            "Jane",
        )
    }

    fn destinations(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|a| a.destination.as_str()).collect()
    }

    #[test]
    fn test_plan_plain_project() {
        let opts = options(&[], false, true);
        let planned = plan(&opts, &resolve(&opts));
        let dests = destinations(&planned);

        assert!(dests.contains(&"app/styles/main.css"));
        assert!(dests.contains(&"app/index.html"));
        assert!(dests.contains(&"bower.json"));
        assert!(!dests.iter().any(|d| d.ends_with(".scss")));
        assert!(!dests.iter().any(|d| d.ends_with(".pug")));
    }

    #[test]
    fn test_plan_sass_and_pug() {
        let opts = options(&[Feature::Sass, Feature::Pug], false, true);
        let planned = plan(&opts, &resolve(&opts));
        let dests = destinations(&planned);

        assert!(dests.contains(&"app/styles/main.scss"));
        for module in SASS_MODULES {
            assert!(dests.contains(&format!("app/styles/{}.scss", module).as_str()));
        }
        assert!(dests.contains(&"app/index.pug"));
        assert!(dests.contains(&"app/_layouts/default.pug"));
        assert_eq!(dests.iter().filter(|d| d.ends_with(".pug")).count(), 10);
        assert!(!dests.contains(&"app/index.html"));
    }

    #[test]
    fn test_plan_copies_assets_verbatim() {
        let opts = options(&[], false, false);
        let planned = plan(&opts, &resolve(&opts));
        let favicon = planned
            .iter()
            .find(|a| a.destination == "app/favicon.ico")
            .unwrap();
        assert_eq!(favicon.source, ArtifactSource::Copy("favicon.ico"));
    }

    #[test]
    fn test_test_harness_follows_framework() {
        let jasmine = test_harness(TestFramework::Jasmine);
        assert_eq!(
            jasmine[0].source,
            ArtifactSource::Render("test/jasmine/index.html".to_string())
        );
        assert_eq!(
            destinations(&jasmine),
            ["test/index.html", "test/spec/test.js", "test/bower.json"]
        );
    }

    #[test]
    fn test_every_planned_template_exists() {
        let library = TemplateLibrary::embedded().unwrap();
        for features in [
            vec![],
            vec![Feature::Sass, Feature::Pug, Feature::Bootstrap],
        ] {
            for framework in [TestFramework::Mocha, TestFramework::Jasmine] {
                let opts = options(&features, true, false).with_test_framework(framework);
                for artifact in plan(&opts, &resolve(&opts)) {
                    match artifact.source {
                        ArtifactSource::Render(id) => assert!(library.contains(&id), "{}", id),
                        ArtifactSource::Copy(id) => assert!(library.contains(id), "{}", id),
                        ArtifactSource::BowerManifest => {}
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_write_project() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&[Feature::Sass, Feature::Bootstrap], true, false);
        let resolved = resolve(&opts);
        let manifest = assemble(&opts, &resolved);
        let library = TemplateLibrary::embedded().unwrap();
        let context = RenderContext::new(&opts, &resolved).with_date("2024-01-01");
        let planned = plan(&opts, &resolved);

        let written = write_project(&library, &context, &manifest, &planned, dir.path())
            .await
            .unwrap();

        assert_eq!(written.len(), planned.len());
        assert!(dir.path().join("app/images").is_dir());
        assert!(dir.path().join("app/fonts").is_dir());

        let bower = std::fs::read_to_string(dir.path().join("bower.json")).unwrap();
        assert!(bower.contains("bootstrap-sass"));

        let favicon = std::fs::read(dir.path().join("app/favicon.ico")).unwrap();
        assert_eq!(favicon, library.get("favicon.ico").unwrap());

        let gulpfile = std::fs::read_to_string(dir.path().join("gulpfile.js")).unwrap();
        assert!(gulpfile.starts_with("// generated on 2024-01-01 using webgen"));

        let html = std::fs::read_to_string(dir.path().join("app/index.html")).unwrap();
        assert!(html.contains("bootstrap-sass/assets/javascripts/bootstrap/affix.js"));
    }

    #[tokio::test]
    async fn test_missing_template_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&[], false, false);
        let resolved = resolve(&opts);
        let library = TemplateLibrary::embedded().unwrap();
        let context = RenderContext::new(&opts, &resolved);
        let planned = vec![Artifact::render("missing.html", "app/missing.html")];

        let result = write_project(
            &library,
            &context,
            &assemble(&opts, &resolved),
            &planned,
            dir.path(),
        )
        .await;
        assert!(result.is_err());
        assert!(!dir.path().join("app/missing.html").exists());
    }
}
