use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(api_base: Option<&str>, environment: Option<&str>, enable_logging: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL base del backend, sin barra final
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// URL completa para una ruta de la API (`/api/v1/...`)
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
