//! Application configuration for coursegen.
//!
//! User config lives at `~/.coursegen/coursegen.toml`.
//! CLI flags override config file values, which override defaults.
//! Secrets are never stored in the config file; the `[generation]` section
//! only names the environment variables that hold them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoursegenError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "coursegen.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".coursegen";

// ---------------------------------------------------------------------------
// Config structs (matching coursegen.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Generation backend settings.
    #[serde(default)]
    pub generation: GenerationSettings,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output directory for course artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Default directory for the assembled site.
    #[serde(default = "default_site_dir")]
    pub site_dir: String,

    /// Default research retriever backend.
    #[serde(default = "default_retriever")]
    pub retriever: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            site_dir: default_site_dir(),
            retriever: default_retriever(),
        }
    }
}

fn default_output_dir() -> String {
    "output".into()
}
fn default_site_dir() -> String {
    "docusaurus".into()
}
fn default_retriever() -> String {
    "duckduckgo".into()
}

/// `[generation]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Name of the env var holding the Azure OpenAI endpoint URL.
    #[serde(default = "default_endpoint_env")]
    pub endpoint_env: String,

    /// Name of the env var holding the API key (never store the key itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Azure OpenAI API version query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Name of the env var holding the chat deployment name.
    #[serde(default = "default_deployment_env")]
    pub deployment_env: String,

    /// Name of the env var holding the research service endpoint (optional).
    #[serde(default = "default_research_endpoint_env")]
    pub research_endpoint_env: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            endpoint_env: default_endpoint_env(),
            api_key_env: default_api_key_env(),
            api_version: default_api_version(),
            deployment_env: default_deployment_env(),
            research_endpoint_env: default_research_endpoint_env(),
        }
    }
}

fn default_endpoint_env() -> String {
    "AZURE_OPENAI_ENDPOINT".into()
}
fn default_api_key_env() -> String {
    "AZURE_OPENAI_API_KEY".into()
}
fn default_api_version() -> String {
    "2024-02-15-preview".into()
}
fn default_deployment_env() -> String {
    "AZURE_OPENAI_DEPLOYMENT_NAME".into()
}
fn default_research_endpoint_env() -> String {
    "COURSEGEN_RESEARCH_ENDPOINT".into()
}

// ---------------------------------------------------------------------------
// Generation config (runtime, resolved from env once at startup)
// ---------------------------------------------------------------------------

/// Resolved generation backend configuration.
///
/// Environment variables are read exactly once, here; everything downstream
/// takes this struct instead of consulting the environment.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Azure OpenAI endpoint base URL.
    pub endpoint: String,
    /// API key sent in the `api-key` header.
    pub api_key: String,
    /// API version query parameter.
    pub api_version: String,
    /// Chat deployment name.
    pub deployment: String,
    /// Research service endpoint, if configured.
    pub research_endpoint: Option<String>,
}

impl GenerationConfig {
    /// Resolve the runtime config from the environment variables named in
    /// the settings. Endpoint, key, and deployment are required; the
    /// research endpoint is optional.
    pub fn resolve(settings: &GenerationSettings) -> Result<Self> {
        let endpoint = require_env(&settings.endpoint_env)?;
        let api_key = require_env(&settings.api_key_env)?;
        let deployment = require_env(&settings.deployment_env)?;
        let research_endpoint = std::env::var(&settings.research_endpoint_env)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string());

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            api_version: settings.api_version.clone(),
            deployment,
            research_endpoint,
        })
    }
}

fn require_env(var_name: &str) -> Result<String> {
    match std::env::var(var_name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(CoursegenError::config(format!(
            "required environment variable {var_name} is not set"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.coursegen/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CoursegenError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.coursegen/coursegen.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CoursegenError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| CoursegenError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CoursegenError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CoursegenError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CoursegenError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
