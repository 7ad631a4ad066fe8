pub use exec_log::{ExecLog, Executed};

pub use mock_driver::{MockConnection, MockDriver};


use cassandra_record::Db;

/// A database handle over a fresh [`MockDriver`].
pub struct DbTest {
    pub db: Db,
    pub driver: MockDriver,
}

impl DbTest {
    pub async fn new() -> Self {
        Self::with_driver(MockDriver::new()).await
    }

    pub async fn with_driver(driver: MockDriver) -> Self {
        let db = Db::builder().build(driver.clone()).await.unwrap();
        Self { db, driver }
    }

    /// The log of statements executed so far.
    pub fn log(&self) -> ExecLog {
        self.driver.log()
    }
}
