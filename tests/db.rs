use std::time::Duration;

use board_catalog::db::ConnectionOptions;
use diesel::RunQueryDsl;
use diesel::sql_types::{Integer, Text};

mod common;

#[derive(diesel::QueryableByName)]
struct Pragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(diesel::QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer)]
    timeout: i32,
}

#[derive(diesel::QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new("test_pragmas.db");
    let mut conn = test_db.pool().get().expect("connection");

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .expect("pragma");

    assert_eq!(pragma.foreign_keys, 1);
}

#[test]
fn comment_for_missing_document_is_rejected() {
    let test_db = common::TestDb::new("test_fk.db");
    let mut conn = test_db.pool().get().expect("connection");

    let result = diesel::sql_query(
        "INSERT INTO comments (document_id, text, replyer) VALUES (999, 'orphan', 'bob')",
    )
    .execute(&mut conn);

    assert!(result.is_err());
}

#[test]
fn pool_applies_configured_options() {
    let test_db = common::TestDb::new("test_options.db");
    let options = ConnectionOptions {
        pool_size: 1,
        busy_timeout: Duration::from_millis(750),
        ..ConnectionOptions::default()
    };
    let pool = test_db.pool_with(&options);
    let mut conn = pool.get().expect("connection");

    let timeout = diesel::sql_query("PRAGMA busy_timeout")
        .get_result::<BusyTimeout>(&mut conn)
        .expect("busy timeout");
    assert_eq!(timeout.timeout, 750);
    assert_eq!(pool.max_size(), 1);
}

#[test]
fn default_pool_runs_in_wal_mode() {
    let test_db = common::TestDb::new("test_wal.db");
    let mut conn = test_db.pool().get().expect("connection");

    let journal = diesel::sql_query("PRAGMA journal_mode")
        .get_result::<JournalMode>(&mut conn)
        .expect("journal mode");

    assert_eq!(journal.journal_mode, "wal");
}
