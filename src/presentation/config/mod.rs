mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, LoggingSettings, OllamaSettings, ServerSettings, Settings, SettingsError,
    normalize_ollama_host,
};
