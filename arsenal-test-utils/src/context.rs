//! Test context structure and utilities.
//!
//! Provides the `TestContext` used across unit and integration tests: an
//! in-memory SQLite database plus a temporary directory standing in for the
//! report storage directory.

use std::path::PathBuf;

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::{constant::TEST_EXPIRY_WARNING_DAYS, error::TestError};

/// Test context over an in-memory database.
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) or
/// the `test_setup_with_*` macros rather than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_core_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert fixtures
/// let user = test.user().insert_user("qm").await?;
/// let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Temporary directory standing in for the report storage directory
    pub report_dir: PathBuf,

    // Held so the directory outlives the test
    _report_dir_guard: TempDir,
}

impl TestContext {
    /// Convert the database handle and report directory into any type that
    /// can be constructed from them.
    ///
    /// This allows conversion to `AppState` without a circular dependency
    /// between the test-utils crate and the main arsenal crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf, i64)>,
    {
        T::from((
            self.db.clone(),
            self.report_dir.clone(),
            TEST_EXPIRY_WARNING_DAYS,
        ))
    }
}

impl TestContext {
    /// Create a new test context.
    pub async fn new() -> Result<Self, TestError> {
        // Every pooled connection to "sqlite::memory:" opens its own blank
        // database, so the pool is capped at one connection; concurrent
        // transactions in tests then queue against a single shared database
        // instead of scattering across empty ones.
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        let report_dir_guard = TempDir::new()?;
        let report_dir = report_dir_guard.path().to_path_buf();

        Ok(TestContext {
            db,
            report_dir,
            _report_dir_guard: report_dir_guard,
        })
    }

    /// Create database tables from schema statements.
    pub async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_core_tables {
    // Pattern 1: No extra entities
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::ArsenalUser),
                schema.create_table_from_entity(entity::prelude::AmmoTypeLine),
                schema.create_table_from_entity(entity::prelude::InventoryStock),
                schema.create_table_from_entity(entity::prelude::Issue),
                schema.create_table_from_entity(entity::prelude::StockAlert),
                schema.create_table_from_entity(entity::prelude::Report),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Extra entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::ArsenalUser),
                schema.create_table_from_entity(entity::prelude::AmmoTypeLine),
                schema.create_table_from_entity(entity::prelude::InventoryStock),
                schema.create_table_from_entity(entity::prelude::Issue),
                schema.create_table_from_entity(entity::prelude::StockAlert),
                schema.create_table_from_entity(entity::prelude::Report),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
