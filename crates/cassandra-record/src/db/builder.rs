use super::{Db, Pool, Shared};
use crate::Result;

use cassandra_record_core::driver::{Consistency, Driver};

use std::sync::Arc;

/// Page size used by `find_in_batches` and `find_each` unless overridden.
const DEFAULT_PAGE_SIZE: usize = 1_000;

#[derive(Debug)]
pub struct Builder {
    max_connections: Option<usize>,
    page_size: usize,
    consistency: Option<Consistency>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            max_connections: None,
            page_size: DEFAULT_PAGE_SIZE,
            consistency: None,
        }
    }
}

impl Builder {
    /// Maximum number of pooled connections. Defaults to the driver's own
    /// limit, or the pool's default when the driver has none.
    pub fn max_connections(&mut self, max_connections: usize) -> &mut Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Default page size for batched reads.
    pub fn page_size(&mut self, page_size: usize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Consistency level attached to every statement.
    pub fn consistency(&mut self, consistency: Consistency) -> &mut Self {
        self.consistency = Some(consistency);
        self
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let pool = Pool::new(driver, self.max_connections).await?;

        Ok(Db {
            shared: Arc::new(Shared {
                pool,
                page_size: self.page_size,
                consistency: self.consistency,
            }),
        })
    }
}
