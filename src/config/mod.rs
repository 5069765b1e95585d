mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Context, Result};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub base_url: String,
    pub omit: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            omit: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub omit: Vec<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let base_url = file.base_url.unwrap_or_else(|| cli.base_url.clone());
        validate_base_url(&base_url)?;

        let omit = file.omit.unwrap_or_else(|| cli.omit.clone());

        Ok(Self { base_url, omit })
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Base URL must use http or https: {}", base_url);
    }
    if url.query().is_some() || url.fragment().is_some() {
        bail!("Base URL must not carry a query or fragment: {}", base_url);
    }
    Ok(())
}
