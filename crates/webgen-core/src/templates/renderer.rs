//! Flat render context and Tera rendering

use crate::error::Error;
use crate::options::{Feature, Options};
use crate::resolve::{BootstrapVariant, ResolvedConfig};
use serde::Serialize;
use std::error::Error as _;
use tera::{Context, Tera};

/// Every value a template may reference. Built once per run from the
/// options and their resolved variants; templates never see anything else.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub date: String,
    pub generator_name: &'static str,
    pub generator_version: &'static str,

    pub shortname: String,
    pub appname: String,
    pub slug: String,
    pub fullname: String,
    pub author: String,

    pub include_sass: bool,
    pub include_pug: bool,
    pub include_bootstrap: bool,
    pub legacy_bootstrap: bool,
    pub bootstrap_sass: bool,
    pub bootstrap_variant: &'static str,
    pub include_fastclick: bool,
    pub include_viewport_fix: bool,
    pub include_uncss: bool,
    pub include_modernizr: bool,
    pub include_jquery: bool,
    pub include_babel: bool,
    pub test_framework: &'static str,

    pub style_ext: &'static str,
    pub markup_ext: &'static str,
    pub bs_path: &'static str,
    pub bs_plugins: &'static [&'static str],
}

impl RenderContext {
    pub fn new(options: &Options, resolved: &ResolvedConfig) -> Self {
        Self {
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            generator_name: crate::GENERATOR_NAME,
            generator_version: crate::GENERATOR_VERSION,

            shortname: options.shortname.clone(),
            appname: options.shortname.clone(),
            slug: options.slug(),
            fullname: options.fullname.clone(),
            author: options.author.clone(),

            include_sass: options.has(Feature::Sass),
            include_pug: options.has(Feature::Pug),
            include_bootstrap: resolved.bootstrap.is_selected(),
            legacy_bootstrap: matches!(resolved.bootstrap, BootstrapVariant::V3 { .. }),
            bootstrap_sass: matches!(
                resolved.bootstrap,
                BootstrapVariant::V3 { sass_flavor: true }
            ),
            bootstrap_variant: resolved.bootstrap.tag(),
            include_fastclick: options.has(Feature::Fastclick),
            include_viewport_fix: options.has(Feature::ViewportFix),
            include_uncss: options.has(Feature::Uncss),
            include_modernizr: options.has(Feature::Modernizr),
            include_jquery: options.include_jquery,
            include_babel: options.use_babel,
            test_framework: options.test_framework.name(),

            style_ext: resolved.style_extension.as_str(),
            markup_ext: resolved.markup_extension.as_str(),
            bs_path: resolved.script_asset_base_path.unwrap_or_default(),
            bs_plugins: resolved.plugins,
        }
    }

    /// Pin the generation date (rendered into file headers)
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn to_tera_context(&self) -> Result<Context, Error> {
        Context::from_serialize(self).map_err(|e| Error::Render {
            name: "<context>".to_string(),
            message: describe(&e),
        })
    }

    /// Render template text. `name` picks HTML escaping and labels errors.
    pub fn render_str(&self, name: &str, text: &str) -> Result<String, Error> {
        let context = self.to_tera_context()?;
        Tera::one_off(text, &context, is_html(name)).map_err(|e| Error::Render {
            name: name.to_string(),
            message: describe(&e),
        })
    }
}

/// Templates whose output values are HTML-escaped
fn is_html(name: &str) -> bool {
    name.ends_with(".html") || name.ends_with(".htm")
}

/// Tera keeps the useful part of an error in its source chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
