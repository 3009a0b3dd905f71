//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use lumina_core::StorefrontConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["lumina.toml", ".lumina.toml", "lumina.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, everything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default lumina.toml.
pub fn generate_default_config() -> String {
    let defaults = StorefrontConfig::default();
    format!(
        r#"# Lumina storefront configuration

[storefront]
api_base_url = "{api}"
# Replicate the fetched catalog this many times (1 = as served)
catalog_expansion = {expansion}
request_timeout_secs = {timeout}
items_per_page = {per_page}
# "paged" or "infinite"
default_mode = "{mode}"
# cart_dir = "~/.local/share/lumina"
"#,
        api = defaults.api_base_url,
        expansion = defaults.catalog_expansion,
        timeout = defaults.request_timeout_secs,
        per_page = defaults.items_per_page,
        mode = defaults.default_mode.as_str(),
    )
}
