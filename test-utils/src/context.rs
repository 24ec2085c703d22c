use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing, or a file-backed one with a connection pool for tests that need concurrent
/// writers. The database is created lazily on first access and persists for the lifetime
/// of the test context.
pub struct TestContext {
    /// Optional database connection to the SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Pool size of a file-backed database; `None` means in-memory.
    max_connections: Option<u32>,

    /// Directory holding the database file, removed when the context drops.
    dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self {
            db: None,
            max_connections: None,
            dir: None,
        }
    }

    /// Creates a test context backed by a temporary database file.
    ///
    /// # Arguments
    /// - `max_connections` - Size of the connection pool
    pub fn file_backed(max_connections: u32) -> Self {
        Self {
            max_connections: Some(max_connections),
            ..Self::new()
        }
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    /// - `Err(TestError::Io)` - Failed to create the directory for a file-backed database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match self.max_connections {
                    None => Database::connect("sqlite::memory:").await?,
                    Some(max_connections) => {
                        let dir = tempfile::tempdir()?;
                        let url = format!(
                            "sqlite://{}?mode=rwc",
                            dir.path().join("test.db").display()
                        );

                        let mut options = ConnectOptions::new(url);
                        options.max_connections(max_connections);

                        let db = Database::connect(options).await?;
                        self.dir = Some(dir);
                        db
                    }
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each statement in sequence. Typically called internally by
    /// `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
