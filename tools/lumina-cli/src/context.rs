//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use lumina_cache::FileStore;
use lumina_commerce::catalog::LoadStatus;
use lumina_core::Storefront;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where `config` came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config_file(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory the cart is persisted in.
    pub fn cart_dir(&self) -> PathBuf {
        match &self.config.storefront.cart_dir {
            Some(dir) => expand_home(dir),
            None => data_dir().join("lumina"),
        }
    }

    /// Build a storefront over the configured API and cart directory.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let config = &self.config.storefront;
        let source = lumina_core::http_source(config)?;
        let cart_dir = self.cart_dir();
        let store = FileStore::open(&cart_dir)
            .with_context(|| format!("Failed to open cart directory: {}", cart_dir.display()))?;
        tracing::debug!(cart_dir = %cart_dir.display(), "opened cart store");
        Ok(Storefront::with_config(config, source, store))
    }

    /// Build a storefront and load the catalog, failing if the load fails.
    pub async fn loaded_storefront(&self) -> Result<Storefront<FileStore>> {
        let mut store = self.storefront()?;
        let spinner = self.output.spinner("Loading catalog...");
        let status = store.load_catalog().await;
        spinner.finish_and_clear();

        if status == LoadStatus::Failed {
            anyhow::bail!(
                "Could not load catalog: {}",
                store.catalog().error().unwrap_or("unknown error")
            );
        }
        self.output.debug(&format!(
            "Loaded {} products in {} categories",
            store.catalog().products().len(),
            store.catalog().categories().len()
        ));
        Ok(store)
    }
}

/// Search `start` and its ancestors for a config file.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".lumina.toml"), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(".lumina.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lumina.json"), "{}").unwrap();
        std::fs::write(dir.path().join("lumina.toml"), "").unwrap();

        assert_eq!(
            find_config_file(dir.path()).unwrap(),
            dir.path().join("lumina.toml")
        );
    }

    #[test]
    fn test_resolve() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(cwd, "lumina.toml"), PathBuf::from("/work/lumina.toml"));
        assert_eq!(resolve(cwd, "/etc/lumina.toml"), PathBuf::from("/etc/lumina.toml"));
    }
}
