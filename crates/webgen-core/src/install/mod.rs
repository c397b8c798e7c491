//! Dependency installation for a generated project
//!
//! Installation is delegated to `yarn` (npm packages from `package.json`) and
//! `bower` (front-end packages from `bower.json`, plus the test harness's own
//! `test/bower.json`).

pub mod check;
pub mod runner;

pub use check::{check_tool, check_tools, Tool, ToolInfo, BOWER, YARN};
pub use runner::{InstallStep, STEP_TIMEOUT};

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Installation flags, as passed on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Do not print the follow-up message
    pub skip_message: bool,
    /// Do not run the package managers at all
    pub skip_install: bool,
}

/// What the installer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped,
    Installed,
}

/// The commands a full install runs, in order
pub fn install_steps(project_dir: &Path) -> Vec<InstallStep> {
    vec![
        InstallStep::new(YARN, &["install"], project_dir),
        InstallStep::new(BOWER, &["install"], project_dir),
        InstallStep::new(BOWER, &["install"], project_dir.join("test")),
    ]
}

/// Instructions for finishing the setup by hand
pub fn follow_up_message() -> String {
    format!(
        "After running {}, inject your\nfront end dependencies by running {}.",
        "yarn install & bower install".yellow().bold(),
        "gulp wiredep".yellow().bold()
    )
}

/// Install declared dependencies, or explain how to when skipped
pub async fn install_dependencies(
    project_dir: &Path,
    options: InstallOptions,
) -> Result<InstallOutcome> {
    if options.skip_install {
        if !options.skip_message {
            println!();
            println!("{}", follow_up_message());
        }
        return Ok(InstallOutcome::Skipped);
    }

    let steps = install_steps(project_dir);
    let tools: Vec<Tool> = steps.iter().map(|s| s.tool).collect();
    for info in check_tools(&tools)? {
        println!("{} {}", "Found".dimmed(), info.summary());
    }

    for step in &steps {
        if !step.dir.join("package.json").exists() && !step.dir.join("bower.json").exists() {
            continue;
        }
        step.run(STEP_TIMEOUT).await?;
    }

    if !options.skip_message {
        println!();
        println!(
            "{} Run {} to start developing.",
            "Dependencies installed.".green().bold(),
            "gulp serve".yellow().bold()
        );
    }

    Ok(InstallOutcome::Installed)
}
