use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DB_ACQUIRE_TIMEOUT_SECS, DEFAULT_DB_HOST,
    DEFAULT_DB_IDLE_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, MAX_DB_MAX_CONNECTIONS, MIN_DB_MAX_CONNECTIONS,
};

use std::fmt;

use serde::Deserialize;

/// Connection settings for the MySQL store.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database (schema) name
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// 0 keeps idle connections forever
    pub idle_timeout_secs: u64,
    /// Abort startup when the schema cannot be created
    pub strict_startup: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_DB_HOST),
            port: DEFAULT_DB_PORT,
            user: String::from(DEFAULT_DB_USER),
            password: String::from(DEFAULT_DB_PASSWORD),
            name: String::from(DEFAULT_DB_NAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: DEFAULT_DB_IDLE_TIMEOUT_SECS,
            strict_startup: false,
        }
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("strict_startup", &self.strict_startup)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::database("database.host must not be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::database("database.port must not be 0"));
        }

        if self.user.trim().is_empty() {
            return Err(ConfigError::database("database.user must not be empty"));
        }

        if self.name.trim().is_empty() {
            return Err(ConfigError::database("database.name must not be empty"));
        }

        if self.max_connections < MIN_DB_MAX_CONNECTIONS
            || self.max_connections > MAX_DB_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.acquire_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.acquire_timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
