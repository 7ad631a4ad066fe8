use cassandra_record::{
    async_trait, row, CqlMigration, Db, Migration, Migrator, Result, SchemaMigration,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use tests::{DbTest, Executed};

const APPLIED: &str = "SELECT * FROM schema_migrations";

fn migrator() -> Migrator {
    let mut migrator = Migrator::new();
    migrator
        .register(
            2,
            "add_logs",
            CqlMigration::new(
                "CREATE TABLE logs(id INT PRIMARY KEY);\nCREATE INDEX ON logs(id);",
                "DROP TABLE logs",
            ),
        )
        .unwrap();
    migrator
        .register(
            1,
            "create_users",
            CqlMigration::new("CREATE TABLE users(user TEXT PRIMARY KEY)", "DROP TABLE users"),
        )
        .unwrap();
    migrator
}

#[tokio::test]
async fn migrate_applies_pending_in_order() {
    let test = DbTest::new().await;

    let applied = migrator().migrate(&test.db).await.unwrap();

    assert_eq!(applied, [1, 2]);
    assert_eq!(
        test.log().all(),
        [
            Executed::statement(APPLIED),
            Executed::statement("CREATE TABLE users(user TEXT PRIMARY KEY)"),
            Executed::statement("INSERT INTO schema_migrations(version) VALUES('1')"),
            Executed::statement("CREATE TABLE logs(id INT PRIMARY KEY)"),
            Executed::statement("CREATE INDEX ON logs(id)"),
            Executed::statement("INSERT INTO schema_migrations(version) VALUES('2')"),
        ]
    );
}

#[tokio::test]
async fn migrate_twice_only_reads() {
    let test = DbTest::new().await;
    test.driver.respond(
        APPLIED,
        vec![row! { "version" => "1" }, row! { "version" => "2" }],
    );

    let migrator = migrator();
    assert!(migrator.pending(&test.db).await.unwrap().is_empty());
    test.log().clear();

    assert!(migrator.migrate(&test.db).await.unwrap().is_empty());
    assert_eq!(test.log().all(), [Executed::statement(APPLIED)]);
}

#[tokio::test]
async fn only_unapplied_versions_run() {
    let test = DbTest::new().await;
    test.driver.respond(APPLIED, vec![row! { "version" => "1" }]);

    let migrator = migrator();
    assert_eq!(migrator.pending(&test.db).await.unwrap(), [2]);
    assert_eq!(migrator.migrate(&test.db).await.unwrap(), [2]);
}

#[tokio::test]
async fn failed_migration_stops_the_run() {
    let test = DbTest::new().await;
    test.driver.fail("CREATE TABLE logs", "boom");

    let err = migrator().migrate(&test.db).await.unwrap_err();

    assert!(err.is_migration());
    assert!(err.root().is_driver());
    assert!(err.to_string().starts_with("migration error: 2_add_logs failed: "));

    // Version 1 stays recorded, version 2 is not
    let log = test.log().all();
    assert!(log.contains(&Executed::statement(
        "INSERT INTO schema_migrations(version) VALUES('1')"
    )));
    assert!(!log.contains(&Executed::statement(
        "INSERT INTO schema_migrations(version) VALUES('2')"
    )));
    assert_eq!(log.last(), Some(&Executed::statement("CREATE TABLE logs(id INT PRIMARY KEY)")));
}

#[tokio::test]
async fn rollback_reverts_the_latest_version() {
    let test = DbTest::new().await;
    test.driver.respond(
        APPLIED,
        vec![row! { "version" => "2" }, row! { "version" => "1" }],
    );

    let rolled_back = migrator().rollback(&test.db).await.unwrap();

    assert_eq!(rolled_back, Some(2));
    assert_eq!(
        test.log().all(),
        [
            Executed::statement(APPLIED),
            Executed::statement("DROP TABLE logs"),
            Executed::statement("DELETE FROM schema_migrations WHERE version = '2'"),
        ]
    );
}

#[tokio::test]
async fn rollback_without_applied_versions() {
    let test = DbTest::new().await;

    assert_eq!(migrator().rollback(&test.db).await.unwrap(), None);
    assert_eq!(test.log().len(), 1);
}

#[tokio::test]
async fn unknown_version() {
    let test = DbTest::new().await;

    let err = migrator().up(&test.db, 42).await.unwrap_err();
    assert!(err.is_migration());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn create_bookkeeping_table() {
    let test = DbTest::new().await;

    SchemaMigration::create_table(&test.db).await.unwrap();

    assert_eq!(
        test.log().pop(),
        Some(Executed::statement(
            "CREATE TABLE IF NOT EXISTS schema_migrations(version TEXT PRIMARY KEY)"
        ))
    );
}

#[tokio::test]
async fn load_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("20161101_create_users.up.cql"),
        "-- users by name\nCREATE TABLE users(user TEXT PRIMARY KEY);\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("20161101_create_users.down.cql"),
        "DROP TABLE users;",
    )
    .unwrap();

    let test = DbTest::new().await;
    let migrator = Migrator::load(dir.path()).unwrap();

    assert_eq!(migrator.migrate(&test.db).await.unwrap(), [20161101]);
    assert_eq!(
        test.log().all()[1..].to_vec(),
        [
            Executed::statement("CREATE TABLE users(user TEXT PRIMARY KEY)"),
            Executed::statement("INSERT INTO schema_migrations(version) VALUES('20161101')"),
        ]
    );

    test.log().clear();
    migrator.down(&test.db, 20161101).await.unwrap();
    assert_eq!(
        test.log().all(),
        [
            Executed::statement("DROP TABLE users"),
            Executed::statement("DELETE FROM schema_migrations WHERE version = '20161101'"),
        ]
    );
}

/// A migration written in Rust that records the direction it ran in.
#[derive(Clone, Default)]
struct Recording {
    runs: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl Migration for Recording {
    async fn up(&self, db: &Db) -> Result<()> {
        self.runs.lock().unwrap().push("up");
        db.execute_cql("ALTER TABLE users ADD visits BIGINT").await?;
        Ok(())
    }

    async fn down(&self, _db: &Db) -> Result<()> {
        self.runs.lock().unwrap().push("down");
        Ok(())
    }
}

#[tokio::test]
async fn code_migrations() {
    let test = DbTest::new().await;
    let recording = Recording::default();

    let mut migrator = Migrator::new();
    migrator.register(7, "add_visits", recording.clone()).unwrap();

    migrator.migrate(&test.db).await.unwrap();
    migrator.down(&test.db, 7).await.unwrap();

    assert_eq!(*recording.runs.lock().unwrap(), ["up", "down"]);
    assert!(test
        .log()
        .all()
        .contains(&Executed::statement("ALTER TABLE users ADD visits BIGINT")));
}
