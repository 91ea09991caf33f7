//! Configuration struct definitions.

use crate::error::Error;
use crate::fmt::{Directive, DirectiveKind};
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level for patlog's own diagnostics.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Field rendering configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FieldsConfig {
    /// Field names never written into a `fields[...]` block.
    pub skip: Vec<String>,
}

/// One `[[pattern]]` entry, as an upstream pattern compiler would emit it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DirectiveConfig {
    /// Vocabulary name (`time`, `level`, `message`, ...).
    pub directive: String,
    /// Display name; defaults to `directive`.
    #[serde(default)]
    pub name: Option<String>,
    /// Kind-specific format string.
    #[serde(default)]
    pub format: String,
}

impl DirectiveConfig {
    /// Unknown names are rejected here so they never reach the renderer.
    ///
    /// # Errors
    /// `Error::UnknownDirective` when `directive` is not in the vocabulary.
    pub fn compile(&self) -> Result<Directive, Error> {
        let kind = DirectiveKind::from_name(&self.directive)
            .ok_or_else(|| Error::UnknownDirective(self.directive.clone()))?;
        let name = self.name.as_deref().unwrap_or(&self.directive);
        Ok(Directive::named(kind, name, self.format.as_str()))
    }
}
