use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::DEFAULT_PROBE_TIMEOUT;

use super::Environment;

const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub ollama: OllamaSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: Vec::new(),
            max_upload_mb: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OllamaSettings {
    pub host: String,
    pub summary_model: String,
    pub vision_model: String,
    pub probe_timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_OLLAMA_HOST.to_string(),
            summary_model: "llama3.2:3b".to_string(),
            vision_model: "llava:7b".to_string(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs(),
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Persistence is disabled when no url is configured.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Loads `appsettings.<environment>.toml` when present, then applies `APP__*`
    /// environment overrides (`APP__OLLAMA__SUMMARY_MODEL=...`) and `OLLAMA_HOST`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        if let Some(host) = std::env::var("OLLAMA_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
        {
            settings.ollama.host = normalize_ollama_host(&host);
        }

        Ok(settings)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb * 1024 * 1024
    }
}

/// Accepts `host:port` as well as full URLs, the way the Ollama CLI does.
pub fn normalize_ollama_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}
