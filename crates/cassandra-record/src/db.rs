mod builder;
pub use builder::Builder;

mod pool;
pub use pool::{Pool, PoolConnection};

use crate::Result;

use cassandra_record_core::driver::{Connection, Consistency, ExecOptions, Rows};
use cassandra_record_cql::stmt::{Batch, Statement};

use std::{future::Future, pin::Pin, sync::Arc};

/// Handle to the store.
///
/// Cloning is cheap; all clones share one connection pool. Every call checks
/// a connection out of the pool and returns it before the call completes.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    pool: Pool,

    /// Page size used by batch reads when the caller does not pass one
    page_size: usize,

    /// Consistency attached to every statement
    consistency: Option<Consistency>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Default page size for batched reads.
    pub fn page_size(&self) -> usize {
        self.shared.page_size
    }

    pub fn consistency(&self) -> Option<Consistency> {
        self.shared.consistency
    }

    /// Upper bound on pooled connections.
    pub fn max_connections(&self) -> usize {
        self.shared.pool.max_size()
    }

    /// Execution options carrying this handle's defaults.
    pub fn exec_options(&self) -> ExecOptions {
        ExecOptions::new().consistency(self.shared.consistency)
    }

    /// Serialize and execute a statement, returning the first page of rows.
    pub async fn execute(&self, stmt: impl Into<Statement>) -> Result<Rows> {
        let cql = stmt.into().to_cql();
        self.execute_with(&cql, self.exec_options()).await
    }

    /// Execute raw CQL text.
    pub async fn execute_cql(&self, cql: &str) -> Result<Rows> {
        self.execute_with(cql, self.exec_options()).await
    }

    /// Execute CQL text with explicit options, e.g. to fetch a specific page.
    pub async fn execute_with(&self, cql: &str, options: ExecOptions) -> Result<Rows> {
        tracing::debug!("{cql}");

        let mut connection = self.shared.pool.get().await?;
        connection.execute(cql, &options).await
    }

    /// Execute the statements of a batch as one unit.
    pub async fn execute_batch(&self, batch: &Batch) -> Result<()> {
        tracing::debug!("{batch}");

        let statements = batch.to_cql();
        let mut connection = self.shared.pool.get().await?;
        connection
            .execute_batch(&statements, &self.exec_options())
            .await
    }

    /// Run `f` with a connection checked out of the pool.
    ///
    /// The connection returns to the pool when `f`'s future completes, whether
    /// or not it succeeded.
    pub async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: for<'c> FnOnce(
            &'c mut dyn Connection,
        ) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>,
    {
        let mut connection = self.shared.pool.get().await?;
        f(&mut **connection).await
    }
}
