//! SQLite connection pool.
//!
//! Pool size, journal mode and lock timeout come from [`ServerConfig`].
//! Foreign keys are always enforced: attachment and comment cleanup relies
//! on `ON DELETE CASCADE`.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{
    ConnectionManager, CustomizeConnection, Error as R2D2Error, Pool, PoolError, PooledConnection,
};
use diesel::sqlite::SqliteConnection;

use crate::models::config::ServerConfig;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const DEFAULT_POOL_SIZE: u32 = 8;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// How the pool opens and prepares SQLite connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub pool_size: u32,
    /// Write-ahead journal with `synchronous = NORMAL`; rollback journal otherwise.
    pub wal: bool,
    pub busy_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            wal: true,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }
}

impl ConnectionOptions {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            pool_size: config.pool_size.max(1),
            wal: config.wal,
            busy_timeout: Duration::from_millis(config.busy_timeout_ms),
        }
    }

    fn pragmas(&self) -> String {
        let journal = if self.wal {
            "PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;"
        } else {
            "PRAGMA journal_mode = DELETE;"
        };
        format!(
            "PRAGMA foreign_keys = ON; {journal} PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        )
    }
}

/// Pragma batch run once on every connection the pool opens.
#[derive(Debug)]
struct Pragmas(String);

impl CustomizeConnection<SqliteConnection, R2D2Error> for Pragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), R2D2Error> {
        conn.batch_execute(&self.0).map_err(R2D2Error::QueryError)
    }
}

pub fn establish_connection_pool(
    database_url: &str,
    options: &ConnectionOptions,
) -> Result<DbPool, PoolError> {
    log::debug!(
        "Opening {} SQLite connection(s) to {database_url} (wal: {}, busy timeout: {:?})",
        options.pool_size,
        options.wal,
        options.busy_timeout
    );

    Pool::builder()
        .max_size(options.pool_size)
        .connection_customizer(Box::new(Pragmas(options.pragmas())))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get()
        .inspect_err(|e| log::error!("No SQLite connection available: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 0,
            database_url: "board.db".to_string(),
            batch_size: 20,
            default_page_size: 10,
            pool_size: 0,
            wal: false,
            busy_timeout_ms: 250,
        }
    }

    #[test]
    fn options_follow_server_config() {
        let options = ConnectionOptions::from_config(&config());

        assert_eq!(options.pool_size, 1);
        assert!(!options.wal);
        assert_eq!(options.busy_timeout, Duration::from_millis(250));
    }

    #[test]
    fn pragmas_always_enable_foreign_keys() {
        let rollback = ConnectionOptions::from_config(&config()).pragmas();
        assert!(rollback.contains("foreign_keys = ON"));
        assert!(rollback.contains("journal_mode = DELETE"));
        assert!(rollback.contains("busy_timeout = 250;"));

        let wal = ConnectionOptions::default().pragmas();
        assert!(wal.contains("foreign_keys = ON"));
        assert!(wal.contains("journal_mode = WAL"));
        assert!(wal.contains("busy_timeout = 5000;"));
    }
}
