//! Charm-style CLI prompts using cliclack

use crate::emit;
use crate::inject;
use crate::install::{self, InstallOptions, InstallOutcome};
use crate::manifest::{assemble, DependencyManifest};
use crate::options::{Feature, Options, TestFramework};
use crate::resolve::{resolve, ResolvedConfig};
use crate::templates::{RenderContext, TemplateLibrary, TemplateSource};
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const WELCOME: &str = "'Allo 'allo! Out of the box I include HTML5 Boilerplate, jQuery, \
                       Normalize.css and a gulpfile.js to build your app.";

const UPGRADE_COMMAND: &str = "cargo install webgen --force";

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the embedded library
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Features to include (skips the checklist)
    pub features: Option<Vec<String>>,

    /// Bootstrap major version, 3 or 4
    pub bootstrap_version: Option<u8>,

    /// Standalone jQuery (only without Bootstrap)
    pub jquery: Option<bool>,

    pub shortname: Option<String>,
    pub fullname: Option<String>,
    pub author: Option<String>,

    pub babel: bool,
    pub test_framework: TestFramework,

    pub skip_welcome_message: bool,
    pub skip_install_message: bool,
    pub skip_install: bool,

    /// Accept defaults for anything not given (non-interactive mode)
    pub yes: bool,
}

/// Run the generator with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(crate::GENERATOR_NAME)?;

    if !args.skip_welcome_message {
        cliclack::note("Welcome", WELCOME)?;
    }

    // Step 1: Load the template library
    let library = load_library(&args, cli_version)?;

    // Step 2: Select directory
    let project_dir = select_directory(&args)?;

    // Step 3: Ask the configuration questions
    let options = collect_options(&args, &project_dir)?;

    // Step 4: Decide variants and dependencies
    let resolved = resolve(&options);
    let manifest = assemble(&options, &resolved);
    log_summary(&options, &resolved, &manifest)?;

    // Step 5: Write the project
    create_project(&library, &options, &resolved, &manifest, &project_dir).await?;

    // Step 6: Install dependencies, then wire them into the markup
    let outcome = install::install_dependencies(
        &project_dir,
        InstallOptions {
            skip_message: args.skip_install_message,
            skip_install: args.skip_install,
        },
    )
    .await?;

    if outcome == InstallOutcome::Installed {
        inject_dependencies(&project_dir, &resolved)?;
    }

    // Step 7: Show next steps
    print_next_steps(&project_dir, outcome)?;

    Ok(())
}

fn load_library(args: &CreateArgs, cli_version: &str) -> Result<TemplateLibrary> {
    let source = TemplateSource::resolve(args.template_dir.clone());
    if let TemplateSource::Local(path) = &source {
        cliclack::log::info(format!("Using local templates from {}", path.display()))?;
    }

    let library = TemplateLibrary::load(&source)?;

    if let Some(mismatch) = library.version_mismatch(cli_version) {
        cliclack::log::warning(format!(
            "Version warning: {}. Consider updating: {}",
            mismatch, UPGRADE_COMMAND
        ))?;
    }

    Ok(library)
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir
        } else {
            let p = PathBuf::from(&input);
            if p.is_absolute() {
                p
            } else {
                current_dir.join(p)
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Warn if directory exists and has files
    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                // Auto-confirm with --yes flag
                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

/// Parse feature names given on the command line
fn parse_features(names: &[String]) -> Result<BTreeSet<Feature>> {
    names
        .iter()
        .filter(|n| !n.trim().is_empty())
        .map(|n| n.parse::<Feature>().map_err(anyhow::Error::from))
        .collect()
}

/// Default project name: the target directory's name
fn default_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "webapp".to_string())
}

fn collect_options(args: &CreateArgs, project_dir: &Path) -> Result<Options> {
    let features = select_features(args)?;
    let has_bootstrap = features.contains(&Feature::Bootstrap);

    // Bootstrap version only matters with Bootstrap, jQuery only without it
    let legacy_bootstrap = if has_bootstrap {
        select_bootstrap_version(args)?
    } else {
        false
    };
    let include_jquery = if has_bootstrap {
        false
    } else {
        confirm_jquery(args)?
    };

    let appname = default_name(project_dir);
    let shortname = ask_text("Project short name?", args.shortname.as_deref(), &appname, args.yes)?;
    let fullname = ask_text("Project full name?", args.fullname.as_deref(), &appname, args.yes)?;
    let author = ask_text(
        "Author name? (That's you!)",
        args.author.as_deref(),
        "",
        args.yes,
    )?;

    Ok(Options::new(
        features,
        legacy_bootstrap,
        include_jquery,
        shortname,
        fullname,
        author,
    )
    .with_babel(args.babel)
    .with_test_framework(args.test_framework))
}

fn select_features(args: &CreateArgs) -> Result<BTreeSet<Feature>> {
    if let Some(names) = &args.features {
        let features = parse_features(names)?;
        let listed: Vec<&str> = features.iter().map(Feature::display_name).collect();
        cliclack::log::info(format!(
            "Features: {}",
            if listed.is_empty() { "none".to_string() } else { listed.join(", ") }
        ))?;
        return Ok(features);
    }

    if args.yes {
        return Ok(Feature::defaults());
    }

    let mut multi = cliclack::multiselect("Which additional features would you like to include?");
    for feature in Feature::ALL {
        multi = multi.item(feature, feature.display_name(), "");
    }

    let selected: Vec<Feature> = multi
        .initial_values(Feature::defaults().into_iter().collect())
        .required(false)
        .interact()?;

    Ok(selected.into_iter().collect())
}

fn select_bootstrap_version(args: &CreateArgs) -> Result<bool> {
    match args.bootstrap_version {
        Some(3) => return Ok(true),
        Some(4) => return Ok(false),
        Some(other) => anyhow::bail!("Unsupported Bootstrap version: {} (expected 3 or 4)", other),
        None => {}
    }

    if args.yes {
        return Ok(false);
    }

    let legacy: bool = cliclack::select("Which version of Bootstrap would you like to include?")
        .item(true, "Bootstrap 3", "")
        .item(false, "Bootstrap 4", "")
        .interact()?;

    Ok(legacy)
}

fn confirm_jquery(args: &CreateArgs) -> Result<bool> {
    if let Some(jquery) = args.jquery {
        return Ok(jquery);
    }

    if args.yes {
        return Ok(true);
    }

    let include: bool = cliclack::confirm("Would you like to include jQuery?")
        .initial_value(true)
        .interact()?;

    Ok(include)
}

fn ask_text(prompt: &str, given: Option<&str>, default: &str, yes: bool) -> Result<String> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    if yes {
        return Ok(default.to_string());
    }

    let mut input = cliclack::input(prompt).required(false);
    if !default.is_empty() {
        input = input.placeholder(default).default_input(default);
    }
    let value: String = input.interact()?;

    Ok(value)
}

fn log_summary(
    options: &Options,
    resolved: &ResolvedConfig,
    manifest: &DependencyManifest,
) -> Result<()> {
    cliclack::log::info(format!(
        "Styles: {}, markup: {}, Bootstrap: {}, tests: {}",
        resolved.style_extension.as_str(),
        resolved.markup_extension.as_str(),
        resolved.bootstrap.tag(),
        options.test_framework
    ))?;

    cliclack::log::info(format!(
        "Front end packages: {}",
        manifest.package_names().join(", ")
    ))?;

    Ok(())
}

async fn create_project(
    library: &TemplateLibrary,
    options: &Options,
    resolved: &ResolvedConfig,
    manifest: &DependencyManifest,
    project_dir: &Path,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let context = RenderContext::new(options, resolved);
    let artifacts = emit::plan(options, resolved);

    match emit::write_project(library, &context, manifest, &artifacts, project_dir).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error("Failed to create project");
            Err(e)
        }
    }
}

fn inject_dependencies(project_dir: &Path, resolved: &ResolvedConfig) -> Result<()> {
    let changed = inject::inject_project(project_dir, resolved)?;

    if changed.is_empty() {
        cliclack::log::warning("No dependency markers were updated")?;
    } else {
        let names: Vec<String> = changed.iter().map(|p| p.display().to_string()).collect();
        cliclack::log::success(format!("Injected dependencies into {}", names.join(", ")))?;
    }

    Ok(())
}

fn print_next_steps(project_dir: &Path, outcome: InstallOutcome) -> Result<()> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }

    if outcome == InstallOutcome::Skipped {
        steps.push("yarn install && bower install".to_string());
        steps.push("gulp wiredep".to_string());
    }

    steps.push("gulp serve".to_string());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
