//! Settings for the birthbook binary.
//!
//! `defaults/birthbook.default.toml` is embedded, then optional files,
//! `BIRTHBOOK_*` environment variables and explicit overrides are layered on
//! top through [`Loader`].

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_TOML: &str = include_str!("../defaults/birthbook.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: Option<PathBuf>,
    pub strip_quotes: bool,
    pub log_filter: String,
    pub greeting: String,
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    environment: bool,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder, environment: true }
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).format(FileFormat::Toml).required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).format(FileFormat::Toml).required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Skip `BIRTHBOOK_*` environment variables.
    pub fn without_environment(mut self) -> Self {
        self.environment = false;
        self
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings> {
        let builder = if self.environment {
            self.builder.add_source(Environment::with_prefix("BIRTHBOOK"))
        } else {
            self.builder
        };
        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
