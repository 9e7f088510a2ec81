// SPDX-License-Identifier: MIT

//! Database connectivity diagnostic.
//!
//! Tries the configured host/port plus the usual local MySQL permutations
//! and reports pass/fail per permutation, the server version, and whether
//! the application database exists. Standalone operational tool; the server
//! never calls this.

use std::time::Duration;

use fitzone::config::Config;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection};

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    // Configured pair first, then the standard local permutations.
    let mut candidates = vec![(config.db_host.clone(), config.db_port)];
    for fallback in [
        ("127.0.0.1".to_string(), 3307),
        ("localhost".to_string(), 3307),
        ("127.0.0.1".to_string(), 3306),
        ("localhost".to_string(), 3306),
    ] {
        if !candidates.contains(&fallback) {
            candidates.push(fallback);
        }
    }

    println!("Database connection test (database: {})", config.db_name);
    println!();

    let mut any_ok = false;
    for (host, port) in &candidates {
        print!("  {host}:{port} ... ");
        match probe(host, *port, &config).await {
            Ok(report) => {
                any_ok = true;
                println!(
                    "ok (server version {}, database {} exists: {})",
                    report.version,
                    config.db_name,
                    if report.database_exists { "yes" } else { "no" }
                );
            }
            Err(err) => println!("FAILED: {err}"),
        }
    }

    if !any_ok {
        println!();
        println!("No permutation connected. Is the MySQL server running?");
        std::process::exit(1);
    }
    Ok(())
}

struct ProbeReport {
    version: String,
    database_exists: bool,
}

/// Connect without selecting a database so the probe also works before the
/// application database has been created.
async fn probe(host: &str, port: u16, config: &Config) -> anyhow::Result<ProbeReport> {
    let options = MySqlConnectOptions::new()
        .host(host)
        .port(port)
        .username(&config.db_user)
        .password(&config.db_pass);

    let mut conn = tokio::time::timeout(PROBE_TIMEOUT, options.connect())
        .await
        .map_err(|_| anyhow::anyhow!("connect timed out after {PROBE_TIMEOUT:?}"))??;

    let (version,): (String,) = sqlx::query_as("SELECT VERSION()")
        .fetch_one(&mut conn)
        .await?;

    let row = sqlx::query("SELECT SCHEMA_NAME FROM information_schema.SCHEMATA WHERE SCHEMA_NAME = ?")
        .bind(&config.db_name)
        .fetch_optional(&mut conn)
        .await?;

    conn.close().await?;

    Ok(ProbeReport {
        version,
        database_exists: row.is_some(),
    })
}
