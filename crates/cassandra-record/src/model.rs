use crate::{relation::IntoCondition, Db, Record, Relation, Result, Schema};

use cassandra_record_core::{async_trait, stmt::Row};

/// A persisted model, identified by its [`Schema`].
///
/// Implementors are usually unit structs whose schema lives in a static:
///
/// ```ignore
/// struct User;
///
/// impl Model for User {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<User>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::builder("users")
///                 .partition_key("user", Type::Text)
///                 .column("domain", Type::Text)
///                 .build()
///                 .unwrap()
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait Model: Sized + Send + Sync + 'static {
    fn schema() -> &'static Schema<Self>;

    fn table_name() -> &'static str {
        Self::schema().table_name()
    }

    /// A relation over every row of the table.
    fn all() -> Relation<Self> {
        Relation::new()
    }

    fn filter(column: &str, condition: impl IntoCondition) -> Relation<Self> {
        Self::all().filter(column, condition)
    }

    /// Build a record from `attributes` and save it. The returned record is
    /// not persisted when validation failed.
    async fn create(db: &Db, attributes: Row) -> Result<Record<Self>> {
        let mut record = Record::with(attributes)?;
        record.save(db).await?;
        Ok(record)
    }

    /// Build a record from `attributes` and save it, failing on invalid
    /// records.
    async fn create_strict(db: &Db, attributes: Row) -> Result<Record<Self>> {
        let mut record = Record::with(attributes)?;
        record.save_strict(db).await?;
        Ok(record)
    }

    /// Hydrate a record from a stored row.
    fn load(row: Row) -> Record<Self> {
        Record::load(row)
    }
}
