//! Connection pooling over a [`Driver`].

use std::ops::{Deref, DerefMut};

use cassandra_record_core::driver::{Connection, Driver};

/// A pool of open connections to the store.
#[derive(Debug)]
pub struct Pool {
    inner: deadpool::managed::Pool<Manager>,
}

impl Pool {
    /// Creates a new connection pool from the given driver.
    ///
    /// One connection is opened eagerly so a misconfigured driver fails here
    /// instead of on the first statement.
    pub async fn new(driver: impl Driver, max_connections: Option<usize>) -> crate::Result<Self> {
        let max_connections = max_connections.or(driver.max_connections());
        let mut builder = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        });

        if let Some(max_connections) = max_connections {
            builder = builder.max_size(max_connections);
        }

        let inner = builder
            .build()
            .map_err(cassandra_record_core::Error::connection_pool)?;

        inner
            .get()
            .await
            .map_err(cassandra_record_core::Error::connection_pool)?;

        Ok(Self { inner })
    }

    /// Retrieves a connection from the pool.
    pub async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self
            .inner
            .get()
            .await
            .map_err(cassandra_record_core::Error::connection_pool)?;
        Ok(PoolConnection { inner: connection })
    }

    /// Upper bound on open connections.
    pub fn max_size(&self) -> usize {
        self.inner.status().max_size
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = crate::Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
