//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::db::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_POOL_SIZE};
use crate::repository::DEFAULT_BATCH_SIZE;
use crate::search::request::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the server and the repository.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound on ids per `IN (...)` child query.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Page size used when a request omits or zeroes `size`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Run SQLite in write-ahead journal mode.
    #[serde(default = "default_wal")]
    pub wal: bool,
    /// How long a connection waits on a locked database.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

fn default_wal() -> bool {
    true
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}
