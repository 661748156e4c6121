//! Catalog process entry point.
//!
//! # Responsibility
//! - Boot configuration, logging and the store, then report schema status.
//! - Keep output deterministic for quick local sanity checks.

use edubase_core::db::migrations::latest_version;
use edubase_core::{core_version, default_log_level, init_logging, open_db, DbConfig};

fn main() {
    if let Err(err) = run() {
        eprintln!("edubase: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_dir) = std::env::var("EDUBASE_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let config = DbConfig::from_env()?;
    let conn = open_db(&config.database_path)?;

    let user_version: u32 =
        conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    println!("edubase_core version={}", core_version());
    println!("database={}", config.database_path);
    println!(
        "schema version={user_version} latest={}",
        latest_version()
    );
    Ok(())
}
