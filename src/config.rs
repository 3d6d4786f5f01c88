//! Configuration file support for bom-tree.
//!
//! Provides YAML-based configuration through `bom-tree.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use bom_tree::application::dto::OutputFormat;
use bom_tree::shared::error::BomTreeError;
use bom_tree::shared::Result;

pub const CONFIG_FILENAME: &str = "bom-tree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub filter: Option<String>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if one was given.
    ///
    /// Only valid values reach here; [`load_config_from_path`] rejects the rest.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null, which means "no settings".
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config, path);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!("Using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .map_err(|message| BomTreeError::Validation {
                message: format!(
                    "Invalid config: {}\n\n💡 Hint: Set 'format' to text, markdown or json.",
                    message
                ),
            })?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile, path: &Path) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(
            "Unknown config field '{}' in {} will be ignored",
            key,
            path.display()
        );
    }
}
