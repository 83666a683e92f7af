//! Store connection provider.
//!
//! Every request acquires its own connection and hands it back before the
//! response is written. Connections come from a bounded pool that connects
//! lazily, so building the provider never touches the network and an
//! unreachable store only surfaces when a connection is requested.

use crate::{DbError, Result};

use todo_config::DatabaseConfig;

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPool, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Connection, MySql};

#[derive(Clone, Debug)]
pub struct ConnectionProvider {
    pool: MySqlPool,
    options: MySqlConnectOptions,
}

impl ConnectionProvider {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let idle_timeout = match config.idle_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(idle_timeout)
            .connect_lazy_with(options.clone());

        log::debug!(
            "Connection provider ready for {}@{}:{}/{}",
            config.user,
            config.host,
            config.port,
            config.name
        );

        Self { pool, options }
    }

    /// Acquire a connection; it returns to the pool when dropped.
    ///
    /// The pool retries failed connects until its acquire timeout and then
    /// only reports the timeout, so on timeout one direct connect is made to
    /// recover the driver's own error text.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>> {
        let e = match self.pool.acquire().await {
            Ok(conn) => return Ok(conn),
            Err(e) => e,
        };

        let message = match e {
            sqlx::Error::PoolTimedOut => self.diagnose_connect().await,
            other => other.to_string(),
        };

        log::warn!("Failed to acquire database connection: {}", message);
        Err(DbError::Connection { message })
    }

    /// Connect once outside the pool and describe why it failed.
    async fn diagnose_connect(&self) -> String {
        match MySqlConnection::connect_with(&self.options).await {
            Ok(conn) => {
                // Store answers now; the pool was simply exhausted
                let _ = conn.close().await;
                sqlx::Error::PoolTimedOut.to_string()
            }
            Err(e) => e.to_string(),
        }
    }

    /// Close every connection and refuse new acquisitions.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
