mod builder;
pub use builder::{Builder, IntoType};

mod callbacks;
pub use callbacks::Event;
pub(crate) use callbacks::{Callback, Callbacks};

use crate::validation::Validator;

use cassandra_record_core::schema::Column;
use cassandra_record_cql::stmt::CreateTable;

use indexmap::IndexMap;
use std::fmt;

/// The declared shape of a model: table, columns, lifecycle hooks and
/// validators.
///
/// A schema is built once per model, usually inside a `OnceLock`, and is
/// read-only afterwards.
pub struct Schema<M> {
    table_name: String,

    /// Declared columns, in declaration order
    columns: IndexMap<String, Column>,

    pub(crate) callbacks: Callbacks<M>,

    pub(crate) validators: Vec<Validator<M>>,
}

impl<M> Schema<M> {
    pub fn builder(table_name: impl Into<String>) -> Builder<M> {
        Builder::new(table_name.into())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.values()
    }

    /// Partition key columns followed by clustering key columns, each group in
    /// declaration order.
    pub fn key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns
            .values()
            .filter(|column| column.is_partition_key())
            .chain(self.columns.values().filter(|column| column.is_clustering_key()))
    }

    /// `CREATE TABLE` for the declared columns.
    pub fn create_table(&self) -> CreateTable {
        CreateTable::new(&self.table_name, self.columns.values().cloned().collect())
    }
}

impl<M> fmt::Debug for Schema<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("table_name", &self.table_name)
            .field("columns", &self.columns)
            .field("callbacks", &self.callbacks.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}
