//! Template rendering
//!
//! A [`TemplateSet`] pairs a header template with a per-function test
//! template. Both are parsed when the set is created, so a broken
//! caller-supplied template is rejected before any generation starts.
//!
//! Templates use Jinja syntax (via `minijinja`) with `trim_blocks`,
//! `lstrip_blocks` and strict undefined handling. The header sees
//! `package` and `imports`; the test template sees `func` (a
//! [`SignatureView`]) and `comment`. The helpers in [`helpers`] are
//! registered on every render.

pub mod builtin;
pub mod helpers;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::core::models::{ImportSpec, SignatureView};
use crate::error::{Error, Result};

pub use builtin::{DEFAULT_HEADER, DEFAULT_TEMPLATE_NAME, DEFAULT_TEST, TEMPLATE_IMPORTS};

const HEADER: &str = "header";
const TEST: &str = "test";

/// Header and per-function template sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    header: String,
    test: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    /// Create a set from two template sources, validating both
    pub fn new(header: impl Into<String>, test: impl Into<String>) -> Result<Self> {
        let set = Self {
            header: header.into(),
            test: test.into(),
        };
        set.environment().map_err(Error::InvalidTemplate)?;
        Ok(set)
    }

    /// Use a custom test template with the built-in header
    pub fn with_test(test: impl Into<String>) -> Result<Self> {
        Self::new(DEFAULT_HEADER, test)
    }

    /// The built-in templates
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            test: DEFAULT_TEST.to_string(),
        }
    }

    /// Prepare an environment for one generation run
    pub fn renderer(&self) -> Result<Renderer<'_>> {
        let env = self.environment().map_err(Error::InvalidTemplate)?;
        Ok(Renderer { env })
    }

    /// Render the package clause and import block
    pub fn render_header(&self, package: &str, imports: &[ImportSpec]) -> Result<String> {
        self.renderer()?.render_header(package, imports)
    }

    /// Render the test for one signature
    pub fn render_test(&self, view: &SignatureView, comment: &str) -> Result<String> {
        self.renderer()?.render_test(view, comment)
    }

    fn environment(&self) -> std::result::Result<Environment<'_>, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        helpers::register(&mut env);
        env.add_template(HEADER, &self.header)?;
        env.add_template(TEST, &self.test)?;
        Ok(env)
    }
}

/// Templates and helpers bound for one generation run
#[derive(Debug)]
pub struct Renderer<'a> {
    env: Environment<'a>,
}

impl Renderer<'_> {
    /// Render the package clause and import block
    pub fn render_header(&self, package: &str, imports: &[ImportSpec]) -> Result<String> {
        self.env
            .get_template(HEADER)
            .and_then(|tmpl| tmpl.render(context! { package => package, imports => imports }))
            .map_err(Error::Header)
    }

    /// Render the test for one signature
    pub fn render_test(&self, view: &SignatureView, comment: &str) -> Result<String> {
        self.env
            .get_template(TEST)
            .and_then(|tmpl| tmpl.render(context! { func => view, comment => comment }))
            .map_err(Error::Test)
    }
}
