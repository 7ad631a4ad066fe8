use cassandra_record::{
    driver::{Consistency, ExecOptions},
    row, Db, Model,
};
use pretty_assertions::assert_eq;
use tests::{models::User, DbTest, Executed, MockDriver};

#[tokio::test]
async fn build_opens_a_connection() {
    let driver = MockDriver::new();
    let db = Db::builder().build(driver.clone()).await.unwrap();

    assert_eq!(driver.connections(), 1);
    assert_eq!(db.page_size(), 1_000);
    assert_eq!(db.consistency(), None);
}

#[tokio::test]
async fn build_fails_when_the_driver_cannot_connect() {
    let err = Db::builder()
        .build(MockDriver::new().refuse_connections())
        .await
        .unwrap_err();

    assert!(err.is_connection_pool());
}

#[tokio::test]
async fn connection_limit() {
    let test = DbTest::with_driver(MockDriver::new().with_max_connections(3)).await;
    assert_eq!(test.db.max_connections(), 3);

    let db = Db::builder()
        .max_connections(5)
        .build(MockDriver::new().with_max_connections(3))
        .await
        .unwrap();
    assert_eq!(db.max_connections(), 5);
}

#[tokio::test]
async fn consistency_is_attached_to_every_statement() {
    let driver = MockDriver::new();
    let db = Db::builder()
        .consistency(Consistency::LocalQuorum)
        .page_size(50)
        .build(driver.clone())
        .await
        .unwrap();

    User::create(&db, row! { "user" => "u" }).await.unwrap();
    User::all().to_a(&db).await.unwrap();

    let log = driver.log();
    assert_eq!(
        log.pop_with_options(),
        Some((
            Executed::statement("INSERT INTO users(user) VALUES('u')"),
            ExecOptions::new().consistency(Some(Consistency::LocalQuorum))
        ))
    );
    assert_eq!(
        log.pop_with_options(),
        Some((
            Executed::statement("SELECT * FROM users"),
            ExecOptions::new()
                .consistency(Some(Consistency::LocalQuorum))
                .page_size(50)
        ))
    );
}

#[tokio::test]
async fn with_connection_lends_a_pooled_connection() {
    let test = DbTest::new().await;
    test.driver
        .respond("system.local", vec![row! { "release_version" => "4.1" }]);

    let rows = test
        .db
        .with_connection(|connection| {
            Box::pin(async move {
                connection
                    .execute("SELECT release_version FROM system.local", &ExecOptions::new())
                    .await
            })
        })
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(test.log().len(), 1);

    // The connection went back to the pool
    test.db.execute_cql("SELECT now() FROM system.local").await.unwrap();
    assert_eq!(test.driver.connections(), 1);
}

#[tokio::test]
async fn driver_errors_propagate() {
    let test = DbTest::new().await;
    test.driver.fail("FROM users", "unavailable");

    let err = User::all().to_a(&test.db).await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "unavailable");
}
