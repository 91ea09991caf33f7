//! TOML configuration for the renderer: the compiled pattern, the field exclusion set,
//! and the level of patlog's own diagnostics.
//!
//! Separated from struct definitions so loading logic stays independent of the serde schema.

mod structs;

pub use structs::{DirectiveConfig, FieldsConfig, GeneralConfig};

use crate::error::Error;
use crate::fmt::{FieldFilter, Pattern};
use crate::internal;
use crate::level::Level;
use crate::render::Renderer;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// An empty document must still produce a working renderer. `#[serde(default)]`
/// on every section makes zero-config work out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub fields: FieldsConfig,
    /// Ordered directives; empty means the default pattern.
    pub pattern: Vec<DirectiveConfig>,
}

impl Config {
    /// # Errors
    /// Fails on TOML syntax errors or values of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// A missing file yields the defaults rather than an error.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// # Errors
    /// `Error::UnknownDirective` for the first entry outside the vocabulary.
    pub fn pattern(&self) -> Result<Pattern, Error> {
        if self.pattern.is_empty() {
            return Ok(Pattern::default());
        }
        self.pattern.iter().map(DirectiveConfig::compile).collect()
    }

    #[must_use]
    pub fn field_filter(&self) -> FieldFilter {
        FieldFilter::new(self.fields.skip.iter().cloned())
    }

    #[must_use]
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.field_filter())
    }

    /// # Errors
    /// `Error::InvalidLevel` when `general.level` is not a level name.
    pub fn level(&self) -> Result<Level, Error> {
        self.general
            .level
            .parse()
            .map_err(|_| Error::InvalidLevel(self.general.level.clone()))
    }

    /// Lenient variant for bootstrapping diagnostics; falls back to `Info`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.level().unwrap_or(Level::Info)
    }
}
