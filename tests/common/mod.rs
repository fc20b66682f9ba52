use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use clients_api::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// File-backed SQLite database living in a temporary directory. The files
/// are removed together with the directory when the fixture drops.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = dir
            .path()
            .join(name)
            .to_str()
            .expect("Invalid database path")
            .to_string();

        let mut conn =
            SqliteConnection::establish(&database_url).expect("Failed to open test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        let pool = establish_connection_pool(&database_url).expect("Failed to build pool");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
