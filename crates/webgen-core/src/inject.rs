//! Dependency injection into generated markup and stylesheets
//!
//! Installed bower packages are resolved from the project manifest (transitive
//! dependencies first), their entry-point files are grouped by extension, and
//! every `bower:<type>` marker block in the target files is rewritten to
//! reference those files.

use crate::manifest::DependencyManifest;
use crate::resolve::{MarkupExtension, ResolvedConfig, StyleExtension};
use anyhow::{Context, Result};
use colored::Colorize;
use glob::{glob, Pattern};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Where bower installs packages, relative to the project root
pub const COMPONENTS_DIR: &str = "bower_components";

/// Packages/files the markup loads some other way
const MARKUP_EXCLUDE: &[&str] = &["bootstrap-sass", "bootstrap.js"];

/// Strips the leading `../` run and the final `..`, leaving a root-relative path
const MARKUP_IGNORE_PATH: &str = r"^(\.\./)*\.\.";

/// Strips every leading `../`
const STYLES_IGNORE_PATH: &str = r"^(\.\./)+";

/// Syntax family of a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Html,
    Pug,
    Scss,
}

impl FileType {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "html" | "htm" => Some(FileType::Html),
            "pug" | "jade" => Some(FileType::Pug),
            "scss" => Some(FileType::Scss),
            _ => None,
        }
    }

    fn block_pattern(&self) -> &'static str {
        match self {
            FileType::Html => r"(?ms)^([ \t]*)<!--\s*bower:(\w+)\s*-->.*?<!--\s*endbower\s*-->",
            FileType::Pug | FileType::Scss => {
                r"(?ms)^([ \t]*)//\s*bower:(\w+)[ \t]*\r?\n.*?//\s*endbower"
            }
        }
    }

    fn open_marker(&self, block: &str) -> String {
        match self {
            FileType::Html => format!("<!-- bower:{} -->", block),
            FileType::Pug | FileType::Scss => format!("// bower:{}", block),
        }
    }

    fn close_marker(&self) -> &'static str {
        match self {
            FileType::Html => "<!-- endbower -->",
            FileType::Pug | FileType::Scss => "// endbower",
        }
    }

    /// Reference line for a file of the block's type, if this syntax supports it
    fn reference(&self, block: &str, path: &str) -> Option<String> {
        match (self, block) {
            (FileType::Html, "js") => Some(format!("<script src=\"{}\"></script>", path)),
            (FileType::Html, "css") => Some(format!("<link rel=\"stylesheet\" href=\"{}\" />", path)),
            (FileType::Pug, "js") => Some(format!("script(src='{}')", path)),
            (FileType::Pug, "css") => Some(format!("link(rel='stylesheet', href='{}')", path)),
            (FileType::Scss, "scss") | (FileType::Scss, "css") => {
                Some(format!("@import \"{}\";", path))
            }
            _ => None,
        }
    }
}

/// One injection pass
#[derive(Debug, Clone)]
pub struct InjectConfig {
    /// Project root; every other path is relative to it
    pub root: PathBuf,
    /// Installed packages directory
    pub directory: PathBuf,
    /// Files whose path contains any of these are not injected
    pub exclude: Vec<String>,
    /// Removed from each computed reference path
    pub ignore_path: Option<Regex>,
    /// Files to rewrite
    pub targets: Vec<PathBuf>,
}

impl InjectConfig {
    /// The pass over `app/index.{html,pug}`, plus the Pug includes that hold
    /// the marker blocks when the layout is split
    pub fn markup(root: &Path, markup: MarkupExtension) -> Result<Self> {
        let mut targets = vec![PathBuf::from(format!("app/index.{}", markup.as_str()))];
        if markup == MarkupExtension::Pug {
            targets.extend(list_targets(root, "app/_includes", FileType::Pug)?);
        }

        Ok(Self {
            root: root.to_path_buf(),
            directory: PathBuf::from(COMPONENTS_DIR),
            exclude: MARKUP_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            ignore_path: Some(Regex::new(MARKUP_IGNORE_PATH)?),
            targets,
        })
    }

    /// The pass over `app/styles/*.scss`
    pub fn stylesheets(root: &Path) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            directory: PathBuf::from(COMPONENTS_DIR),
            exclude: Vec::new(),
            ignore_path: Some(Regex::new(STYLES_IGNORE_PATH)?),
            targets: list_targets(root, "app/styles", FileType::Scss)?,
        })
    }
}

/// Files of one type directly inside `root/dir`, relative to root, sorted by name
fn list_targets(root: &Path, dir: &str, file_type: FileType) -> Result<Vec<PathBuf>> {
    let search_dir = root.join(dir);
    let mut targets = Vec::new();
    if !search_dir.is_dir() {
        return Ok(targets);
    }

    for entry in WalkDir::new(&search_dir).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read {}", search_dir.display()))?;
        let matches_type = FileType::from_path(entry.path()) == Some(file_type);
        if entry.file_type().is_file() && matches_type {
            targets.push(PathBuf::from(dir).join(entry.file_name()));
        }
    }
    Ok(targets)
}

/// An installed package and the entry points to inject for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    /// Entry-point patterns relative to the package directory
    pub main: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PackageMeta {
    #[serde(default)]
    main: Option<MainField>,
    #[serde(default)]
    dependencies: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MainField {
    One(String),
    Many(Vec<String>),
}

impl MainField {
    fn into_vec(self) -> Vec<String> {
        match self {
            MainField::One(file) => vec![file],
            MainField::Many(files) => files,
        }
    }
}

fn read_meta(package_dir: &Path) -> Result<Option<PackageMeta>> {
    for name in [".bower.json", "bower.json"] {
        let path = package_dir.join(name);
        if path.is_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let meta = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            return Ok(Some(meta));
        }
    }
    Ok(None)
}

/// Installed packages in injection order: each package after its dependencies
pub fn resolve_packages(
    manifest: &DependencyManifest,
    components_dir: &Path,
) -> Result<Vec<Package>> {
    fn visit(
        name: &str,
        manifest: &DependencyManifest,
        components_dir: &Path,
        seen: &mut HashSet<String>,
        ordered: &mut Vec<Package>,
    ) -> Result<()> {
        if !seen.insert(name.to_string()) {
            return Ok(());
        }

        let package_dir = components_dir.join(name);
        if !package_dir.is_dir() {
            eprintln!(
                "{} {} is not installed in {}",
                "Warning:".yellow(),
                name,
                components_dir.display()
            );
            return Ok(());
        }

        let meta = read_meta(&package_dir)?.unwrap_or_default();
        for dependency in meta.dependencies.keys() {
            visit(dependency, manifest, components_dir, seen, ordered)?;
        }

        let main = match manifest.override_for(name) {
            Some(files) => files,
            None => meta.main.map(MainField::into_vec).unwrap_or_default(),
        };

        ordered.push(Package {
            name: name.to_string(),
            main,
        });
        Ok(())
    }

    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for name in manifest.package_names() {
        visit(name, manifest, components_dir, &mut seen, &mut ordered)?;
    }
    Ok(ordered)
}

/// Expand a package's entry-point globs into existing files (relative to root)
fn expand_main(root: &Path, package_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&root.join(package_dir).to_string_lossy());
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.trim_start_matches("./");
        let full = format!("{}/{}", base, pattern);
        let mut matched = false;

        let entries =
            glob(&full).with_context(|| format!("Invalid entry point pattern: {}", pattern))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    if let Ok(relative) = path.strip_prefix(root) {
                        files.push(relative.to_path_buf());
                        matched = true;
                    }
                }
                Ok(_) => {}
                Err(e) => eprintln!("{} {}", "Warning:".yellow(), e),
            }
        }

        if !matched {
            eprintln!(
                "{} {} listed as an entry point but not found",
                "Warning:".yellow(),
                package_dir.join(pattern).display()
            );
        }
    }

    Ok(files)
}

/// Lexical path from `from_dir` to `to`, both relative to the same root, `/`-separated
fn relative_path(from_dir: &Path, to: &Path) -> String {
    let normal = |p: &Path| -> Vec<String> {
        p.components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                _ => None,
            })
            .collect()
    };
    let from = normal(from_dir);
    let to = normal(to);

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(to[common..].iter().cloned());
    parts.join("/")
}

/// Entry-point files grouped by extension, in injection order
pub fn collect_files(
    config: &InjectConfig,
    packages: &[Package],
) -> Result<BTreeMap<String, Vec<PathBuf>>> {
    let mut grouped: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    let mut seen = HashSet::new();

    for package in packages {
        let package_dir = config.directory.join(&package.name);
        for file in expand_main(&config.root, &package_dir, &package.main)? {
            let display = file.to_string_lossy().replace('\\', "/");
            if config.exclude.iter().any(|pattern| display.contains(pattern.as_str())) {
                continue;
            }
            let Some(ext) = file.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if seen.insert(file.clone()) {
                grouped.entry(ext.to_string()).or_default().push(file);
            }
        }
    }

    Ok(grouped)
}

/// Rewrite the marker blocks of one file's contents
pub fn rewrite_blocks(
    content: &str,
    file_type: FileType,
    target: &Path,
    files: &BTreeMap<String, Vec<PathBuf>>,
    ignore_path: Option<&Regex>,
) -> Result<String> {
    let block = Regex::new(file_type.block_pattern())?;
    let from_dir = target.parent().unwrap_or(Path::new(""));

    let rewritten = block.replace_all(content, |caps: &regex::Captures| {
        let indent = &caps[1];
        let block_type = &caps[2];

        let references: Vec<String> = files
            .get(block_type)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(|path| {
                        let relative = relative_path(from_dir, path);
                        let shown = match ignore_path {
                            Some(re) => re.replace(&relative, "").to_string(),
                            None => relative,
                        };
                        file_type.reference(block_type, &shown)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let mut out = format!("{}{}\n", indent, file_type.open_marker(block_type));
        for reference in references {
            out.push_str(indent);
            out.push_str(&reference);
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(file_type.close_marker());
        out
    });

    Ok(rewritten.into_owned())
}

/// Run one injection pass. Returns the targets that changed.
pub fn inject(manifest: &DependencyManifest, config: &InjectConfig) -> Result<Vec<PathBuf>> {
    let components_dir = config.root.join(&config.directory);
    let packages = resolve_packages(manifest, &components_dir)?;
    let files = collect_files(config, &packages)?;

    let mut changed = Vec::new();
    for target in &config.targets {
        let Some(file_type) = FileType::from_path(target) else {
            eprintln!(
                "{} {} has no injectable file type, skipping",
                "Warning:".yellow(),
                target.display()
            );
            continue;
        };

        let path = config.root.join(target);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let rewritten =
            rewrite_blocks(&content, file_type, target, &files, config.ignore_path.as_ref())?;

        if rewritten != content {
            std::fs::write(&path, rewritten)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            changed.push(target.clone());
        }
    }

    Ok(changed)
}

/// Inject into the generated markup, then into stylesheets when Sass is used.
/// Dependencies come from the project's `bower.json` as it is on disk.
pub fn inject_project(root: &Path, resolved: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let manifest = DependencyManifest::read(root)?;
    let mut changed = inject(&manifest, &InjectConfig::markup(root, resolved.markup_extension)?)?;

    if resolved.style_extension == StyleExtension::Scss {
        changed.extend(inject(&manifest, &InjectConfig::stylesheets(root)?)?);
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::assemble;
    use crate::options::{Feature, Options};
    use crate::resolve::resolve;
    use std::collections::BTreeSet;
    use std::fs;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(features: &[Feature], legacy_bootstrap: bool, include_jquery: bool) -> Options {
        Options::new(
            features.iter().copied().collect::<BTreeSet<_>>(),
            legacy_bootstrap,
            include_jquery,
            "demo",
            "Demo",
            "Jane",
        )
    }

    #[test]
    fn test_expand_main_globs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "bower_components/pkg/dist/css/pkg.css", "");
        write(root, "bower_components/pkg/dist/js/deep/pkg.js", "");
        write(root, "bower_components/pkg/fonts/a.woff", "");
        write(root, "bower_components/pkg/fonts/b.woff", "");
        write(root, "bower_components/pkg/main.js", "");

        let patterns: Vec<String> = ["dist/*/pkg.css", "dist/**/*.js", "fonts/*", "./main.js"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        let files = expand_main(root, Path::new("bower_components/pkg"), &patterns).unwrap();

        assert_eq!(
            files,
            [
                PathBuf::from("bower_components/pkg/dist/css/pkg.css"),
                PathBuf::from("bower_components/pkg/dist/js/deep/pkg.js"),
                PathBuf::from("bower_components/pkg/fonts/a.woff"),
                PathBuf::from("bower_components/pkg/fonts/b.woff"),
                PathBuf::from("bower_components/pkg/main.js"),
            ]
        );
    }

    #[test]
    fn test_expand_main_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = expand_main(
            dir.path(),
            Path::new("bower_components/pkg"),
            &["dist/missing.js".to_string()],
        )
        .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_markup_targets_pug_includes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "app/index.pug", "");
        write(root, "app/_includes/head.pug", "");
        write(root, "app/_includes/foot-scripts.pug", "");
        write(root, "app/_includes/notes.txt", "");

        let config = InjectConfig::markup(root, MarkupExtension::Pug).unwrap();
        assert_eq!(
            config.targets,
            [
                PathBuf::from("app/index.pug"),
                PathBuf::from("app/_includes/foot-scripts.pug"),
                PathBuf::from("app/_includes/head.pug"),
            ]
        );

        let html = InjectConfig::markup(root, MarkupExtension::Html).unwrap();
        assert_eq!(html.targets, [PathBuf::from("app/index.html")]);
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("app"), Path::new("bower_components/jquery/dist/jquery.js")),
            "../bower_components/jquery/dist/jquery.js"
        );
        assert_eq!(
            relative_path(Path::new("app/styles"), Path::new("bower_components/a/a.scss")),
            "../../bower_components/a/a.scss"
        );
        assert_eq!(relative_path(Path::new("app"), Path::new("app/main.js")), "main.js");
    }

    #[test]
    fn test_ignore_paths() {
        let markup = Regex::new(MARKUP_IGNORE_PATH).unwrap();
        assert_eq!(
            markup.replace("../bower_components/jquery/dist/jquery.js", ""),
            "/bower_components/jquery/dist/jquery.js"
        );
        let styles = Regex::new(STYLES_IGNORE_PATH).unwrap();
        assert_eq!(
            styles.replace("../../bower_components/a/a.scss", ""),
            "bower_components/a/a.scss"
        );
    }

    #[test]
    fn test_rewrite_html_blocks_keeps_indent() {
        let content = "<head>\n    <!-- bower:css -->\n    <link rel=\"stylesheet\" href=\"stale.css\" />\n    <!-- endbower -->\n</head>\n<body>\n  <!-- bower:js -->\n  <!-- endbower -->\n</body>\n";
        let mut files = BTreeMap::new();
        files.insert(
            "css".to_string(),
            vec![PathBuf::from("bower_components/normalize-css/normalize.css")],
        );
        files.insert(
            "js".to_string(),
            vec![
                PathBuf::from("bower_components/jquery/dist/jquery.js"),
                PathBuf::from("bower_components/fastclick/lib/fastclick.js"),
            ],
        );
        let ignore = Regex::new(MARKUP_IGNORE_PATH).unwrap();

        let out = rewrite_blocks(
            content,
            FileType::Html,
            Path::new("app/index.html"),
            &files,
            Some(&ignore),
        )
        .unwrap();

        assert!(out.contains(
            "    <!-- bower:css -->\n    <link rel=\"stylesheet\" href=\"/bower_components/normalize-css/normalize.css\" />\n    <!-- endbower -->"
        ));
        assert!(!out.contains("stale.css"));
        let jquery = out.find("<script src=\"/bower_components/jquery/dist/jquery.js\"></script>").unwrap();
        let fastclick = out.find("fastclick.js").unwrap();
        assert!(jquery < fastclick);
    }

    #[test]
    fn test_rewrite_pug_and_scss_blocks() {
        let mut files = BTreeMap::new();
        files.insert(
            "js".to_string(),
            vec![PathBuf::from("bower_components/jquery/dist/jquery.js")],
        );
        files.insert(
            "scss".to_string(),
            vec![PathBuf::from("bower_components/bootstrap-sass/assets/stylesheets/_bootstrap.scss")],
        );

        let pug = rewrite_blocks(
            "  // bower:js\n  // endbower\n",
            FileType::Pug,
            Path::new("app/_includes/foot-scripts.pug"),
            &files,
            None,
        )
        .unwrap();
        assert!(pug.contains("  script(src='../../bower_components/jquery/dist/jquery.js')\n"));

        let ignore = Regex::new(STYLES_IGNORE_PATH).unwrap();
        let scss = rewrite_blocks(
            "// bower:scss\n// endbower\n",
            FileType::Scss,
            Path::new("app/styles/main.scss"),
            &files,
            Some(&ignore),
        )
        .unwrap();
        assert_eq!(
            scss,
            "// bower:scss\n@import \"bower_components/bootstrap-sass/assets/stylesheets/_bootstrap.scss\";\n// endbower\n"
        );
    }

    #[test]
    fn test_resolve_packages_puts_dependencies_first() {
        let dir = tempfile::tempdir().unwrap();
        let components = dir.path().join(COMPONENTS_DIR);
        write(
            &components,
            "bootstrap/.bower.json",
            r#"{"name":"bootstrap","main":["dist/css/bootstrap.css","dist/js/bootstrap.js"],"dependencies":{"jquery":">=1.9.1"}}"#,
        );
        write(
            &components,
            "jquery/bower.json",
            r#"{"name":"jquery","main":"dist/jquery.js"}"#,
        );

        let opts = options(&[Feature::Bootstrap], false, false);
        let manifest = assemble(&opts, &resolve(&opts));
        let packages = resolve_packages(&manifest, &components).unwrap();

        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["jquery", "bootstrap"]);
        assert_eq!(packages[0].main, ["dist/jquery.js"]);
    }

    #[test]
    fn test_overrides_replace_package_main() {
        let dir = tempfile::tempdir().unwrap();
        let components = dir.path().join(COMPONENTS_DIR);
        write(
            &components,
            "bootstrap/.bower.json",
            r#"{"name":"bootstrap","main":["less/bootstrap.less","dist/js/bootstrap.js"]}"#,
        );

        let opts = options(&[Feature::Bootstrap], true, false);
        let manifest = assemble(&opts, &resolve(&opts));
        let packages = resolve_packages(&manifest, &components).unwrap();

        assert_eq!(packages[0].main.len(), 4);
        assert_eq!(packages[0].main[1], "dist/css/bootstrap.css");
    }

    #[test]
    fn test_missing_package_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&[], false, true);
        let manifest = assemble(&opts, &resolve(&opts));
        let packages = resolve_packages(&manifest, &dir.path().join(COMPONENTS_DIR)).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_inject_project_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(root, "bower_components/bootstrap-sass/.bower.json", r#"{"name":"bootstrap-sass","dependencies":{"jquery":"1.9.1 - 2"}}"#);
        write(root, "bower_components/bootstrap-sass/assets/stylesheets/_bootstrap.scss", "");
        write(root, "bower_components/bootstrap-sass/assets/javascripts/bootstrap.js", "");
        write(root, "bower_components/bootstrap-sass/assets/fonts/bootstrap/glyphicons.woff", "");
        write(root, "bower_components/jquery/.bower.json", r#"{"name":"jquery","main":"dist/jquery.js"}"#);
        write(root, "bower_components/jquery/dist/jquery.js", "");
        write(root, "bower_components/modernizr/.bower.json", r#"{"name":"modernizr","main":"modernizr.js"}"#);
        write(root, "bower_components/modernizr/modernizr.js", "");

        write(root, "app/index.html", "<body>\n    <!-- bower:js -->\n    <!-- endbower -->\n</body>\n");
        write(root, "app/styles/main.scss", "// bower:scss\n// endbower\n@import \"styles\";\n");
        write(root, "app/styles/styles.scss", "body { color: red; }\n");

        let opts = options(&[Feature::Sass, Feature::Bootstrap, Feature::Modernizr], true, false);
        let resolved = resolve(&opts);
        let manifest = assemble(&opts, &resolved);
        write(root, "bower.json", &manifest.to_json_string().unwrap());

        let changed = inject_project(root, &resolved).unwrap();
        assert_eq!(
            changed,
            [PathBuf::from("app/index.html"), PathBuf::from("app/styles/main.scss")]
        );

        let html = fs::read_to_string(root.join("app/index.html")).unwrap();
        assert!(html.contains("<script src=\"/bower_components/jquery/dist/jquery.js\"></script>"));
        assert!(html.contains("<script src=\"/bower_components/modernizr/modernizr.js\"></script>"));
        assert!(!html.contains("bootstrap-sass"));

        let scss = fs::read_to_string(root.join("app/styles/main.scss")).unwrap();
        assert!(scss.contains(
            "@import \"bower_components/bootstrap-sass/assets/stylesheets/_bootstrap.scss\";"
        ));

        let untouched = fs::read_to_string(root.join("app/styles/styles.scss")).unwrap();
        assert_eq!(untouched, "body { color: red; }\n");
    }

    #[test]
    fn test_inject_project_pug_includes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(root, "bower_components/jquery/.bower.json", r#"{"name":"jquery","main":"dist/jquery.js"}"#);
        write(root, "bower_components/jquery/dist/jquery.js", "");
        write(root, "bower_components/normalize-css/bower.json", r#"{"name":"normalize-css","main":"normalize.css"}"#);
        write(root, "bower_components/normalize-css/normalize.css", "");

        write(root, "app/index.pug", "extends _layouts/default\n");
        write(root, "app/_includes/head.pug", "  // bower:css\n  // endbower\n");
        write(root, "app/_includes/foot-scripts.pug", "// bower:js\n// endbower\n");

        let opts = options(&[Feature::Pug], false, true);
        let resolved = resolve(&opts);
        write(root, "bower.json", &assemble(&opts, &resolved).to_json_string().unwrap());

        let changed = inject_project(root, &resolved).unwrap();
        assert_eq!(
            changed,
            [
                PathBuf::from("app/_includes/foot-scripts.pug"),
                PathBuf::from("app/_includes/head.pug"),
            ]
        );

        let head = fs::read_to_string(root.join("app/_includes/head.pug")).unwrap();
        assert!(head.contains("  link(rel='stylesheet', href='/bower_components/normalize-css/normalize.css')\n"));
        let scripts = fs::read_to_string(root.join("app/_includes/foot-scripts.pug")).unwrap();
        assert!(scripts.contains("script(src='/bower_components/jquery/dist/jquery.js')"));
    }

    #[test]
    fn test_inject_project_uses_manifest_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(root, "bower_components/lodash/bower.json", r#"{"name":"lodash"}"#);
        write(root, "bower_components/lodash/dist/lodash.js", "");
        write(root, "app/index.html", "<!-- bower:js -->\n<!-- endbower -->\n");
        write(
            root,
            "bower.json",
            r#"{"name":"demo","dependencies":{"lodash":"*"},"overrides":{"lodash":{"main":"dist/*.js"}}}"#,
        );

        let opts = options(&[], false, false);
        inject_project(root, &resolve(&opts)).unwrap();

        let html = fs::read_to_string(root.join("app/index.html")).unwrap();
        assert!(html.contains("<script src=\"/bower_components/lodash/dist/lodash.js\"></script>"));
    }
}
