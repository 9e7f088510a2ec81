// SPDX-License-Identifier: MIT

//! MySQL connection bootstrap.
//!
//! The only capability exposed is "obtain a configured connection handle"
//! plus the probes the diagnostic tool needs. No queries or schema beyond
//! that live here.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::Config;
use crate::error::AppError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// MySQL database client.
#[derive(Clone)]
pub struct Database {
    pool: Option<MySqlPool>,
}

impl Database {
    /// Open a connection pool using the configured host/port/name/credentials
    /// and verify it with a ping.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_pass)
            .database(&config.db_name);

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(CONNECT_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MySQL: {}", e)))?;

        tracing::info!(
            host = %config.db_host,
            port = config.db_port,
            database = %config.db_name,
            "Connected to MySQL"
        );

        Ok(Self { pool: Some(pool) })
    }

    /// Create a mock database client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { pool: None }
    }

    /// Helper to get the pool or return an error if offline.
    fn get_pool(&self) -> Result<&MySqlPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Round-trip a trivial query to confirm the connection is alive.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.get_pool()?)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Server version string, e.g. `"8.0.36"`.
    pub async fn server_version(&self) -> Result<String, AppError> {
        let (version,): (String,) = sqlx::query_as("SELECT VERSION()")
            .fetch_one(self.get_pool()?)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(version)
    }

    /// Whether a database with the given name exists on the server.
    pub async fn database_exists(&self, name: &str) -> Result<bool, AppError> {
        let row = sqlx::query(
            "SELECT SCHEMA_NAME FROM information_schema.SCHEMATA WHERE SCHEMA_NAME = ?",
        )
        .bind(name)
        .fetch_optional(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_database_is_offline() {
        let db = Database::new_mock();

        let err = db.ping().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));

        let err = db.server_version().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
