use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    builder(paths)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Loads the config from `paths`, then applies each element of `overrides`
/// as an additional TOML source. Used by tests and local tooling.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    overrides
        .iter()
        .fold(builder(paths)?, |builder, over| {
            builder.add_source(File::from_str(over, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn builder(
    paths: &[impl AsRef<Path>],
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryConfig {
    /// Access key for the enquiry delivery endpoint. When unset, submissions
    /// fail closed without a network call.
    pub access_key: Option<String>,
    /// Points the gateway client at a non-production endpoint, e.g. the
    /// `groundwork_testing` fake.
    pub endpoint_override: Option<Url>,
}
