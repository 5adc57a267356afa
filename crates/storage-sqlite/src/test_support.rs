//! Temp-database fixtures for repository tests.

use diesel::RunQueryDsl;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

use crate::db::{create_pool, get_connection, run_migrations, DbPool};

/// Creates a migrated database in a temp dir. Keep the `TempDir` alive for
/// as long as the pool is used.
pub fn setup_pool() -> (Arc<DbPool>, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    (pool, temp_dir)
}

/// Inserts a stock row directly to satisfy foreign keys.
pub fn insert_stock(pool: &Arc<DbPool>, id: &str, symbol: &str, name: &str) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::sql_query(format!(
        "INSERT INTO stocks (id, symbol, name, grade, created_at, updated_at) \
         VALUES ('{}', '{}', '{}', 'A', datetime('now'), datetime('now'))",
        id, symbol, name
    ))
    .execute(&mut conn)
    .expect("Failed to create test stock");
}

/// Inserts a portfolio row directly to satisfy foreign keys.
pub fn insert_portfolio(pool: &Arc<DbPool>, id: &str, name: &str) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::sql_query(format!(
        "INSERT INTO portfolios (id, name, is_active, created_at, updated_at) \
         VALUES ('{}', '{}', 1, datetime('now'), datetime('now'))",
        id, name
    ))
    .execute(&mut conn)
    .expect("Failed to create test portfolio");
}
