//! Interactive generator flow using cliclack
//!
//! Asks the configuration questions (or takes them from flags), then drives the
//! pipeline from resolution through injection. Only built with the `tui` feature.

mod prompts;

pub use prompts::{run, CreateArgs};
