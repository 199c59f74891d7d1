//! Shared configuration loader for the mdsite toolchain.
//!
//! `defaults/mdsite.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdsiteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdsite_babel::formats::treeviz::TreevizOptions;
use mdsite_babel::publish::PublishSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/mdsite.default.toml");

/// Top-level configuration consumed by mdsite applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdsiteConfig {
    pub site: SiteConfig,
    pub inspect: InspectConfig,
}

/// Where a site's sources live and where it gets published.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
    pub base_path: String,
}

impl From<&SiteConfig> for PublishSpec {
    fn from(config: &SiteConfig) -> Self {
        PublishSpec::new(&config.content_dir, &config.output_dir)
            .with_static_dir(&config.static_dir)
            .with_template(&config.template)
            .with_base_path(config.base_path.clone())
    }
}

impl From<SiteConfig> for PublishSpec {
    fn from(config: SiteConfig) -> Self {
        PublishSpec::from(&config)
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_attributes: bool,
    pub max_value_len: usize,
}

impl From<&TreevizConfig> for TreevizOptions {
    fn from(config: &TreevizConfig) -> Self {
        TreevizOptions {
            show_attributes: config.show_attributes,
            max_value_len: config.max_value_len,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdsiteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdsiteConfig, ConfigError> {
    Loader::new().build()
}
