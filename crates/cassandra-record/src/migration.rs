mod cql_migration;
pub use cql_migration::{split_statements, CqlMigration};

mod migrator;
pub use migrator::Migrator;

mod schema_migration;
pub use schema_migration::SchemaMigration;

use crate::{Db, Result};

use cassandra_record_core::async_trait;

/// One versioned schema change.
#[async_trait]
pub trait Migration: Send + Sync {
    async fn up(&self, db: &Db) -> Result<()>;

    async fn down(&self, _db: &Db) -> Result<()> {
        Ok(())
    }
}
