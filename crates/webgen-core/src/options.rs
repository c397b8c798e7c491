//! User-selected generation options
//!
//! `Options` is produced once by intake (interactive prompts or CLI flags) and
//! never mutated afterwards. Everything downstream derives from it.

use crate::error::Error;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Optional features offered in the feature checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Sass,
    Pug,
    Bootstrap,
    Fastclick,
    ViewportFix,
    Uncss,
    Modernizr,
}

impl Feature {
    /// Every feature, in checklist order
    pub const ALL: [Feature; 7] = [
        Feature::Sass,
        Feature::Pug,
        Feature::Bootstrap,
        Feature::Fastclick,
        Feature::ViewportFix,
        Feature::Uncss,
        Feature::Modernizr,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Sass => "Sass",
            Feature::Pug => "Pug",
            Feature::Bootstrap => "Bootstrap",
            Feature::Fastclick => "Fastclick",
            Feature::ViewportFix => "ViewportUnitsBuggyfill",
            Feature::Uncss => "UnCSS",
            Feature::Modernizr => "Modernizr",
        }
    }

    /// Whether the feature is pre-checked in the checklist
    pub fn checked_by_default(&self) -> bool {
        matches!(
            self,
            Feature::Sass | Feature::Fastclick | Feature::ViewportFix | Feature::Modernizr
        )
    }

    /// Features that are pre-checked in the checklist
    pub fn defaults() -> BTreeSet<Feature> {
        Self::ALL
            .iter()
            .copied()
            .filter(Feature::checked_by_default)
            .collect()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sass" | "scss" => Ok(Feature::Sass),
            "pug" | "jade" => Ok(Feature::Pug),
            "bootstrap" | "bs" => Ok(Feature::Bootstrap),
            "fastclick" => Ok(Feature::Fastclick),
            "viewportfix" | "viewport-fix" | "viewportunitsbuggyfill"
            | "viewport-units-buggyfill" => Ok(Feature::ViewportFix),
            "uncss" => Ok(Feature::Uncss),
            "modernizr" => Ok(Feature::Modernizr),
            _ => {
                let known: Vec<String> =
                    Feature::ALL.iter().map(|f| f.display_name().to_lowercase()).collect();
                Err(Error::UnknownFeature(s.to_string(), known.join(", ")))
            }
        }
    }
}

/// Test framework whose scaffolding is generated under `test/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TestFramework {
    #[default]
    Mocha,
    Jasmine,
}

impl TestFramework {
    pub fn name(&self) -> &'static str {
        match self {
            TestFramework::Mocha => "mocha",
            TestFramework::Jasmine => "jasmine",
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TestFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mocha" => Ok(TestFramework::Mocha),
            "jasmine" => Ok(TestFramework::Jasmine),
            _ => Err(Error::UnsupportedTestFramework(s.to_string())),
        }
    }
}

/// Answers collected from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub features: BTreeSet<Feature>,

    /// Bootstrap 3 instead of 4. Only meaningful with `Feature::Bootstrap`.
    pub legacy_bootstrap: bool,

    /// Standalone jQuery. Only meaningful without `Feature::Bootstrap`.
    pub include_jquery: bool,

    pub shortname: String,
    pub fullname: String,
    pub author: String,
    pub use_babel: bool,
    pub test_framework: TestFramework,
}

impl Options {
    /// Build options, dropping the answer that does not apply to the
    /// Bootstrap selection.
    pub fn new(
        features: BTreeSet<Feature>,
        legacy_bootstrap: bool,
        include_jquery: bool,
        shortname: impl Into<String>,
        fullname: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let has_bootstrap = features.contains(&Feature::Bootstrap);
        Self {
            features,
            legacy_bootstrap: has_bootstrap && legacy_bootstrap,
            include_jquery: !has_bootstrap && include_jquery,
            shortname: shortname.into(),
            fullname: fullname.into(),
            author: author.into(),
            use_babel: true,
            test_framework: TestFramework::default(),
        }
    }

    pub fn with_babel(mut self, use_babel: bool) -> Self {
        self.use_babel = use_babel;
        self
    }

    pub fn with_test_framework(mut self, framework: TestFramework) -> Self {
        self.test_framework = framework;
        self
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Package-safe form of `shortname`
    pub fn slug(&self) -> String {
        slugify(&self.shortname)
    }
}

/// Fallback used when a name normalizes to nothing
const DEFAULT_SLUG: &str = "webapp";

/// Normalize free text into a lowercase, dash-separated identifier.
///
/// Never fails: accents are folded, every other unsafe character becomes a
/// separator, and runs of separators collapse into a single `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        let folded = fold_diacritic(c);
        for c in folded.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }
    }

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

fn fold_diacritic(c: char) -> String {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ą' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'ď' | 'đ' => "d",
        'Ď' | 'Đ' => "D",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => "I",
        'ł' => "l",
        'Ł' => "L",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ř' => "r",
        'Ř' => "R",
        'ś' | 'š' | 'ş' => "s",
        'Ś' | 'Š' | 'Ş' => "S",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'Ť' | 'Ţ' => "T",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        _ => return c.to_string(),
    };
    folded.to_string()
}
