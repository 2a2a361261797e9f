//! Helpers shared by the integration tests.

use order_reports::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// A migrated SQLite database living in a temporary directory.
///
/// The directory, and with it the database and its WAL files, is removed on drop.
pub struct TestDb {
    dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
