use crate::{Db, Model, Result, Schema};

use cassandra_record_core::stmt::Type;

use std::sync::OnceLock;

/// Bookkeeping model: one `schema_migrations` row per applied version.
#[derive(Debug)]
pub struct SchemaMigration;

impl Model for SchemaMigration {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<SchemaMigration>> = OnceLock::new();

        SCHEMA.get_or_init(|| {
            Schema::builder("schema_migrations")
                .partition_key("version", Type::Text)
                .build()
                .expect("schema_migrations declares a partition key")
        })
    }
}

impl SchemaMigration {
    /// Create the bookkeeping table if it does not exist yet.
    pub async fn create_table(db: &Db) -> Result<()> {
        db.execute(Self::schema().create_table().if_not_exists())
            .await?;
        Ok(())
    }
}
