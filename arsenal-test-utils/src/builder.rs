//! Declarative test builder.
//!
//! Chains table setup before the final `build()` call creates the context.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
        }
    }

    /// Add all application tables to the test database: ArsenalUser,
    /// AmmoTypeLine, InventoryStock, Issue, StockAlert, and Report.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use arsenal_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), arsenal_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ArsenalUser)
    ///     .with_table(InventoryStock)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating all configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut stmts = Vec::new();

        if self.include_core_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            stmts.push(schema.create_table_from_entity(entity::prelude::ArsenalUser));
            stmts.push(schema.create_table_from_entity(entity::prelude::AmmoTypeLine));
            stmts.push(schema.create_table_from_entity(entity::prelude::InventoryStock));
            stmts.push(schema.create_table_from_entity(entity::prelude::Issue));
            stmts.push(schema.create_table_from_entity(entity::prelude::StockAlert));
            stmts.push(schema.create_table_from_entity(entity::prelude::Report));
        }

        stmts.extend(self.tables);

        context.with_tables(stmts).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
