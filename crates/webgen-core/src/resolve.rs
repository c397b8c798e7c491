//! Variant resolution: which concrete template forms a set of options maps to

use crate::options::{Feature, Options};
use serde::Serialize;

/// Bootstrap 4 script modules, in load order
pub const BOOTSTRAP4_PLUGINS: &[&str] = &[
    "util",
    "alert",
    "button",
    "carousel",
    "collapse",
    "dropdown",
    "modal",
    "scrollspy",
    "tab",
    "tooltip",
    "popover",
];

/// Bootstrap 3 script modules, in load order. Later modules depend on
/// earlier ones (popover needs tooltip).
pub const BOOTSTRAP3_PLUGINS: &[&str] = &[
    "affix",
    "alert",
    "dropdown",
    "tooltip",
    "modal",
    "transition",
    "button",
    "popover",
    "carousel",
    "scrollspy",
    "collapse",
    "tab",
];

pub const BOOTSTRAP4_JS_PATH: &str = "/bower_components/bootstrap/js/dist/";
pub const BOOTSTRAP3_SASS_JS_PATH: &str =
    "/bower_components/bootstrap-sass/assets/javascripts/bootstrap/";
pub const BOOTSTRAP3_JS_PATH: &str = "/bower_components/bootstrap/js/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleExtension {
    Scss,
    Css,
}

impl StyleExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleExtension::Scss => "scss",
            StyleExtension::Css => "css",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupExtension {
    Pug,
    Html,
}

impl MarkupExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupExtension::Pug => "pug",
            MarkupExtension::Html => "html",
        }
    }
}

/// Which Bootstrap foundation the project is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapVariant {
    None,
    /// Bootstrap 3, either the `bootstrap-sass` port or the stock LESS build
    V3 { sass_flavor: bool },
    V4,
}

impl BootstrapVariant {
    /// Base path the markup loads individual Bootstrap script modules from
    pub fn script_asset_base_path(&self) -> Option<&'static str> {
        match self {
            BootstrapVariant::None => None,
            BootstrapVariant::V4 => Some(BOOTSTRAP4_JS_PATH),
            BootstrapVariant::V3 { sass_flavor: true } => Some(BOOTSTRAP3_SASS_JS_PATH),
            BootstrapVariant::V3 { sass_flavor: false } => Some(BOOTSTRAP3_JS_PATH),
        }
    }

    /// Script modules to load, in order
    pub fn plugins(&self) -> &'static [&'static str] {
        match self {
            BootstrapVariant::None => &[],
            BootstrapVariant::V4 => BOOTSTRAP4_PLUGINS,
            BootstrapVariant::V3 { sass_flavor: true } => BOOTSTRAP3_PLUGINS,
            BootstrapVariant::V3 { sass_flavor: false } => BOOTSTRAP3_PLUGINS,
        }
    }

    /// Short tag used by templates: `none`, `v3` or `v4`
    pub fn tag(&self) -> &'static str {
        match self {
            BootstrapVariant::None => "none",
            BootstrapVariant::V3 { .. } => "v3",
            BootstrapVariant::V4 => "v4",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, BootstrapVariant::None)
    }
}

/// Concrete per-feature decisions derived from `Options`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub style_extension: StyleExtension,
    pub markup_extension: MarkupExtension,
    pub bootstrap: BootstrapVariant,
    pub script_asset_base_path: Option<&'static str>,
    pub plugins: &'static [&'static str],
}

/// Decide template variants for the given options. Total and pure.
pub fn resolve(options: &Options) -> ResolvedConfig {
    let has_sass = options.has(Feature::Sass);

    let style_extension = if has_sass {
        StyleExtension::Scss
    } else {
        StyleExtension::Css
    };

    let markup_extension = if options.has(Feature::Pug) {
        MarkupExtension::Pug
    } else {
        MarkupExtension::Html
    };

    let bootstrap = match (options.has(Feature::Bootstrap), options.legacy_bootstrap) {
        (false, _) => BootstrapVariant::None,
        (true, false) => BootstrapVariant::V4,
        (true, true) => BootstrapVariant::V3 {
            sass_flavor: has_sass,
        },
    };

    ResolvedConfig {
        style_extension,
        markup_extension,
        bootstrap,
        script_asset_base_path: bootstrap.script_asset_base_path(),
        plugins: bootstrap.plugins(),
    }
}
