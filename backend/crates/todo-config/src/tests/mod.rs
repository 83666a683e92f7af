
use std::env;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const ALL_VARS: &[&str] = &[
    "TODO_CONFIG_FILE",
    "TODO_SERVER_HOST",
    "TODO_SERVER_PORT",
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "DB_MAX_CONNECTIONS",
    "DB_ACQUIRE_TIMEOUT_SECS",
    "DB_IDLE_TIMEOUT_SECS",
    "DB_STRICT_STARTUP",
    "TODO_LOG_LEVEL",
    "TODO_LOG_COLORED",
    "TODO_LOG_FILE",
];

/// Remove every variable Config::load() reads, restoring them on drop
pub(crate) fn clean_env() -> Vec<EnvGuard> {
    ALL_VARS.iter().copied().map(EnvGuard::remove).collect()
}
