//! Shared fixtures for integration tests.
#![allow(dead_code)]

use board_catalog::db::{ConnectionOptions, DbPool, establish_connection_pool};
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite file living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    url: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 path").to_string();

        let mut conn = SqliteConnection::establish(&url).expect("open database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        let pool =
            establish_connection_pool(&url, &ConnectionOptions::default()).expect("build pool");
        Self {
            _dir: dir,
            url,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Separate pool on the same file, opened with `options`.
    pub fn pool_with(&self, options: &ConnectionOptions) -> DbPool {
        establish_connection_pool(&self.url, options).expect("build pool")
    }
}
