use crate::{
    CONFIG_FILE_ENV, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config once at startup.
    ///
    /// Loading order:
    /// 1. Start from defaults
    /// 2. If TODO_CONFIG_FILE is set, read that TOML file instead
    /// 3. Apply DB_* and TODO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let mut config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_toml(Path::new(&path))?,
            _ => Config::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: PathBuf::from(path),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: PathBuf::from(path),
            source: e,
        })
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the database password).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  database: {}@{}:{}/{} (password {})",
            self.database.user,
            self.database.host,
            self.database.port,
            self.database.name,
            if self.database.password.is_empty() {
                "empty"
            } else {
                "set"
            }
        );
        info!(
            "  pool: max={}, acquire_timeout={}s, idle_timeout={}s, strict_startup={}",
            self.database.max_connections,
            self.database.acquire_timeout_secs,
            self.database.idle_timeout_secs,
            self.database.strict_startup
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TODO_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TODO_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("DB_HOST", &mut self.database.host);
        Self::apply_env_parse("DB_PORT", &mut self.database.port);
        Self::apply_env_string("DB_USER", &mut self.database.user);
        Self::apply_env_string("DB_PASSWORD", &mut self.database.password);
        Self::apply_env_string("DB_NAME", &mut self.database.name);
        Self::apply_env_parse("DB_MAX_CONNECTIONS", &mut self.database.max_connections);
        Self::apply_env_parse(
            "DB_ACQUIRE_TIMEOUT_SECS",
            &mut self.database.acquire_timeout_secs,
        );
        Self::apply_env_parse("DB_IDLE_TIMEOUT_SECS", &mut self.database.idle_timeout_secs);
        Self::apply_env_bool("DB_STRICT_STARTUP", &mut self.database.strict_startup);

        // Logging
        Self::apply_env_parse("TODO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TODO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TODO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
