mod options;
pub use options::{Consistency, ExecOptions, PagingState};

mod rows;
pub use rows::Rows;

use crate::async_trait;

use std::fmt::Debug;

/// Opens connections to the store.
///
/// The engine never talks to the network itself; a driver implementation
/// owns the wire protocol, retries and timeouts.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on open connections, if the driver has one. The pool uses
    /// its own default otherwise.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single connection, checked out of the pool for the duration of one call.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute one statement and return the first page of rows (or the page
    /// identified by `options.paging_state`).
    ///
    /// Statements that return no rows (INSERT, UPDATE, DELETE, DDL) return an
    /// empty [`Rows`].
    async fn execute(&mut self, cql: &str, options: &ExecOptions) -> crate::Result<Rows>;

    /// Execute the statements as one logged batch.
    async fn execute_batch(&mut self, statements: &[String], options: &ExecOptions)
        -> crate::Result<()>;
}
