//! webgen CLI - Scaffold a front-end web app with gulp, Bower and optional Bootstrap

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use webgen_core::tui::CreateArgs;
use webgen_core::TestFramework;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "webgen")]
#[command(about = "Scaffold a front-end web app with gulp, Bower and optional Bootstrap")]
#[command(version)]
pub struct Args {
    /// Local directory to use for templates instead of the built-in ones (for development use)
    #[arg(long = "template-dir", env = webgen_core::templates::TEMPLATE_DIR_ENV)]
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Features to include (comma-separated: sass,pug,bootstrap,fastclick,viewportfix,uncss,modernizr)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Bootstrap major version (only used with the bootstrap feature)
    #[arg(long = "bootstrap-version", value_parser = clap::value_parser!(u8).range(3..=4))]
    pub bootstrap_version: Option<u8>,

    /// Include jQuery (only asked when Bootstrap is not selected)
    #[arg(long)]
    pub jquery: Option<bool>,

    /// Project short name
    #[arg(long)]
    pub shortname: Option<String>,

    /// Project full name
    #[arg(long)]
    pub fullname: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Test framework for the browser test harness
    #[arg(long = "test-framework", value_enum, default_value_t = TestFramework::Mocha)]
    pub test_framework: TestFramework,

    /// Use Babel for ES2015+ scripts
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub babel: bool,

    /// Do not print the welcome message
    #[arg(long = "skip-welcome-message")]
    pub skip_welcome_message: bool,

    /// Do not print the message after installing dependencies
    #[arg(long = "skip-install-message")]
    pub skip_install_message: bool,

    /// Do not run yarn and bower after generating
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            features: args.features,
            bootstrap_version: args.bootstrap_version,
            jquery: args.jquery,
            shortname: args.shortname,
            fullname: args.fullname,
            author: args.author,
            babel: args.babel,
            test_framework: args.test_framework,
            skip_welcome_message: args.skip_welcome_message,
            skip_install_message: args.skip_install_message,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = webgen_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
