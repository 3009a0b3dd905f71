//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use lumina_commerce::search::PaginationMode;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let sf = &ctx.config.storefront;
    ctx.output.info("[storefront]");
    ctx.output.kv("api_base_url", &sf.api_base_url);
    ctx.output
        .kv("catalog_expansion", &sf.catalog_expansion.to_string());
    ctx.output
        .kv("request_timeout_secs", &sf.request_timeout_secs.to_string());
    ctx.output.kv("items_per_page", &sf.items_per_page.to_string());
    ctx.output.kv("default_mode", sf.default_mode.as_str());
    ctx.output
        .kv("cart_dir", &ctx.cart_dir().display().to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = &ctx.config_path else {
        bail!("No config file found. Run `lumina config init` to create one.");
    };

    let mut config = CliConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;
    config
        .storefront
        .validate()
        .with_context(|| format!("Refusing to set {} = {}", key, value))?;
    config.save(config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join("lumina.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let sf = &ctx.config.storefront;
    let mut warnings: Vec<String> = Vec::new();

    if sf.catalog_expansion > 20 {
        warnings.push(format!(
            "storefront.catalog_expansion = {} multiplies the catalog; pages may be slow",
            sf.catalog_expansion
        ));
    }
    if sf.items_per_page > 100 {
        warnings.push(format!(
            "storefront.items_per_page = {} is unusually large",
            sf.items_per_page
        ));
    }

    if let Err(e) = sf.validate() {
        ctx.output.error(&format!("Error: {}", e));
        bail!("Configuration is invalid");
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output
            .success("Configuration is valid (with warnings)");
    }

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let sf = &config.storefront;
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "api_base_url"] => Ok(sf.api_base_url.clone()),
        ["storefront", "catalog_expansion"] => Ok(sf.catalog_expansion.to_string()),
        ["storefront", "request_timeout_secs"] => Ok(sf.request_timeout_secs.to_string()),
        ["storefront", "items_per_page"] => Ok(sf.items_per_page.to_string()),
        ["storefront", "default_mode"] => Ok(sf.default_mode.as_str().to_string()),
        ["storefront", "cart_dir"] => Ok(sf
            .cart_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let sf = &mut config.storefront;
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "api_base_url"] => sf.api_base_url = value.to_string(),
        ["storefront", "catalog_expansion"] => sf.catalog_expansion = value.parse()?,
        ["storefront", "request_timeout_secs"] => sf.request_timeout_secs = value.parse()?,
        ["storefront", "items_per_page"] => sf.items_per_page = value.parse()?,
        ["storefront", "default_mode"] => {
            sf.default_mode = value
                .parse::<PaginationMode>()
                .map_err(anyhow::Error::msg)?
        }
        ["storefront", "cart_dir"] => {
            sf.cart_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
