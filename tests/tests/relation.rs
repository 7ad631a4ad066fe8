use cassandra_record::{
    driver::{ExecOptions, PagingState},
    row, Db, Direction, Model, Value,
};
use pretty_assertions::assert_eq;
use tests::{
    models::{SearchLog, User},
    DbTest, Executed, MockDriver,
};
use tokio_stream::StreamExt;

fn users(names: &[&str]) -> Vec<cassandra_record::Row> {
    names
        .iter()
        .map(|name| row! { "user" => *name, "domain" => "d" })
        .collect()
}

#[test]
fn builders_leave_the_receiver_untouched() {
    let r1 = User::filter("domain", "domain1");
    let r2 = r1.limit(10).order_by("user", Direction::Desc);

    assert_eq!(r1.to_cql(), "SELECT * FROM users WHERE domain = 'domain1'");
    assert_eq!(
        r2.to_cql(),
        "SELECT * FROM users WHERE domain = 'domain1' ORDER BY user DESC LIMIT 10"
    );
}

#[test]
fn filters_compile_to_eq_and_in() {
    let relation = SearchLog::filter("date", "2016-11-01")
        .filter("bucket", 1i32..=3)
        .filter("username", ["a", "b"]);

    assert_eq!(
        relation.to_cql(),
        "SELECT * FROM search_logs WHERE date = '2016-11-01' AND bucket IN (1, 2, 3) AND username IN ('a', 'b')"
    );

    let relation = User::filter("domain", "domain1"..="domain2");
    assert_eq!(
        relation.to_cql(),
        "SELECT * FROM users WHERE domain IN ('domain1', 'domain2')"
    );

    let relation = User::all().filter_all([("user", "u"), ("domain", "d")]);
    assert_eq!(
        relation.to_cql(),
        "SELECT * FROM users WHERE user = 'u' AND domain = 'd'"
    );
}

#[test]
fn filter_values_are_cast_when_possible() {
    // "3" is cast to the int column; an uncastable value is used as given
    let relation = SearchLog::filter("bucket", "3").filter("date", "yesterday");

    assert_eq!(
        relation.to_cql(),
        "SELECT * FROM search_logs WHERE bucket = 3 AND date = 'yesterday'"
    );
}

#[test]
fn raw_filters_bind_arguments() {
    let relation = User::all().filter_cql(
        "domain = :domain AND visits > :visits",
        [("domain", Value::from("it's")), ("visits", Value::from(10i64))],
    );

    assert_eq!(
        relation.to_cql(),
        "SELECT * FROM users WHERE domain = 'it''s' AND visits > 10"
    );
}

#[test]
fn reordering_a_column_keeps_its_position() {
    let relation = SearchLog::all()
        .order_by("id", Direction::Asc)
        .order_by("username", Direction::Asc)
        .order_by("id", Direction::Desc);

    assert_eq!(
        relation.to_cql(),
        "SELECT * FROM search_logs ORDER BY id DESC, username ASC"
    );
}

#[test]
fn projections() {
    let projection = User::filter("user", "u").select(["user", "domain"]);
    assert_eq!(
        projection.to_cql(),
        "SELECT user, domain FROM users WHERE user = 'u'"
    );

    let projection = User::all().select(["domain"]).distinct().limit(5);
    assert_eq!(projection.to_cql(), "SELECT DISTINCT domain FROM users LIMIT 5");

    let projection = User::all().select(Vec::<String>::new());
    assert_eq!(projection.to_cql(), "SELECT * FROM users");
}

#[tokio::test]
async fn empty_projection_reads_whole_rows() {
    let test = DbTest::new().await;
    test.driver.respond("SELECT * FROM users", users(&["a"]));

    let projection = User::filter("domain", "d").select(Vec::<String>::new());
    let rows = projection.to_a(&test.db).await.unwrap();

    assert_eq!(rows, users(&["a"]));
    assert_eq!(
        test.log().pop(),
        Some(Executed::statement("SELECT * FROM users WHERE domain = 'd'"))
    );
}

#[tokio::test]
async fn to_a_hydrates_persisted_records() {
    let test = DbTest::new().await;
    test.driver.respond("FROM users", users(&["a", "b"]));

    let relation = User::filter("domain", "d");
    let records = relation.to_a(&test.db).await.unwrap();

    assert_eq!(records.len(), 2);
    for record in records {
        assert!(record.is_persisted());
        assert!(!record.is_changed());
    }
    assert_eq!(records[0].get("user").unwrap(), &Value::from("a"));
    assert_eq!(records[1].get("visits").unwrap(), &Value::Null);
}

#[tokio::test]
async fn to_a_is_cached_per_relation() {
    let test = DbTest::new().await;
    test.driver.respond("FROM users", users(&["a"]));

    let relation = User::all();
    relation.to_a(&test.db).await.unwrap();
    relation.to_a(&test.db).await.unwrap();
    assert_eq!(test.log().len(), 1);

    // Derived relations and clones start with an empty cache
    relation.limit(1).to_a(&test.db).await.unwrap();
    relation.clone().to_a(&test.db).await.unwrap();
    assert_eq!(test.log().len(), 3);
}

#[tokio::test]
async fn first_and_first_n_limit_the_query() {
    let test = DbTest::new().await;
    test.driver.respond("FROM users", users(&["a", "b"]));

    let first = User::all().first(&test.db).await.unwrap().unwrap();
    assert_eq!(first.get("user").unwrap(), &Value::from("a"));
    assert_eq!(
        test.log().pop(),
        Some(Executed::statement("SELECT * FROM users LIMIT 1"))
    );

    let records = User::all().first_n(&test.db, 2).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        test.log().pop(),
        Some(Executed::statement("SELECT * FROM users LIMIT 2"))
    );

    test.driver.reset_responses();
    assert!(User::all().first(&test.db).await.unwrap().is_none());
}

#[tokio::test]
async fn count_reads_the_count_column() {
    let test = DbTest::new().await;
    test.driver
        .respond("COUNT(*)", vec![row! { "count" => 3i64 }]);

    let count = User::filter("domain", "d").limit(1).count(&test.db).await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        test.log().pop(),
        Some(Executed::statement(
            "SELECT COUNT(*) FROM users WHERE domain = 'd'"
        ))
    );

    test.driver.reset_responses();
    let err = User::all().count(&test.db).await.unwrap_err();
    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn find_each_follows_paging_state() {
    let driver = MockDriver::new();
    let db = Db::builder().page_size(2).build(driver.clone()).await.unwrap();
    driver.respond_pages(
        "FROM users",
        vec![users(&["a", "b"]), users(&["c"])],
    );

    let names: Vec<String> = User::all()
        .find_each(&db)
        .collect::<Vec<_>>()
        .await
        .unwrap()
        .iter()
        .map(|record| record.get_as::<String>("user").unwrap().unwrap())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);

    let log = driver.log();
    assert_eq!(
        log.pop_with_options(),
        Some((
            Executed::statement("SELECT * FROM users"),
            ExecOptions::new().page_size(2)
        ))
    );
    assert_eq!(
        log.pop_with_options(),
        Some((
            Executed::statement("SELECT * FROM users"),
            ExecOptions::new()
                .page_size(2)
                .paging_state(Some(PagingState(vec![1])))
        ))
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn find_each_restarts_from_the_first_page() {
    let test = DbTest::new().await;
    test.driver
        .respond_pages("FROM users", vec![users(&["a"]), users(&["b"])]);

    let relation = User::all();
    let mut cursor = relation.find_each(&test.db);
    assert!(cursor.next().await.unwrap().is_ok());
    drop(cursor);

    let all = relation.find_each(&test.db).collect::<Vec<_>>().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(test.log().len(), 3);
}

#[tokio::test]
async fn find_in_batches_skips_empty_pages() {
    let test = DbTest::new().await;
    test.driver.respond_pages(
        "FROM users",
        vec![users(&["a", "b"]), vec![], users(&["c"])],
    );

    let batches = User::all().find_in_batches(&test.db, 2);
    tokio::pin!(batches);

    let mut sizes = vec![];
    while let Some(batch) = batches.next().await {
        sizes.push(batch.unwrap().len());
    }

    assert_eq!(sizes, [2, 1]);
    assert_eq!(test.log().len(), 3);
}

#[tokio::test]
async fn projection_returns_rows() {
    let test = DbTest::new().await;
    test.driver
        .respond("SELECT DISTINCT domain", vec![row! { "domain" => "d" }]);

    let projection = User::all().select(["domain"]).distinct();
    let rows = projection.to_a(&test.db).await.unwrap();

    assert_eq!(rows, [row! { "domain" => "d" }]);
    assert_eq!(
        projection.first(&test.db).await.unwrap(),
        Some(row! { "domain" => "d" })
    );
}

#[tokio::test]
async fn delete_all_is_one_statement() {
    let test = DbTest::new().await;

    User::filter("user", ["a", "b"]).delete_all(&test.db).await.unwrap();

    assert_eq!(
        test.log().all(),
        [Executed::statement("DELETE FROM users WHERE user IN ('a', 'b')")]
    );
}

#[tokio::test]
async fn delete_in_batches_batches_each_page() {
    let test = DbTest::new().await;
    test.driver
        .respond_pages("SELECT", vec![users(&["a", "b"]), users(&["c"])]);

    User::filter("domain", "d")
        .delete_in_batches(&test.db)
        .await
        .unwrap();

    let select = "SELECT * FROM users WHERE domain = 'd'";
    assert_eq!(
        test.log().all(),
        [
            Executed::statement(select),
            Executed::batch([
                "DELETE FROM users WHERE user = 'a'",
                "DELETE FROM users WHERE user = 'b'",
            ]),
            Executed::statement(select),
            Executed::batch(["DELETE FROM users WHERE user = 'c'"]),
        ]
    );
}

#[tokio::test]
async fn update_all_casts_assignments() {
    let test = DbTest::new().await;
    let relation = User::filter("domain", "d");

    relation
        .update_all(&test.db, [("visits", Value::from("5")), ("active", Value::from(true))])
        .await
        .unwrap();
    assert_eq!(
        test.log().pop(),
        Some(Executed::statement(
            "UPDATE users SET visits = 5, active = true WHERE domain = 'd'"
        ))
    );

    let err = relation
        .update_all(&test.db, [("nope", 1i32)])
        .await
        .unwrap_err();
    assert!(err.is_unknown_column());

    let err = relation
        .update_all(&test.db, [("visits", "many")])
        .await
        .unwrap_err();
    assert!(err.is_type_cast());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn update_all_cql_binds_arguments() {
    let test = DbTest::new().await;

    User::filter("user", "u")
        .update_all_cql(&test.db, "domain = :domain", [("domain", "x")])
        .await
        .unwrap();

    assert_eq!(
        test.log().pop(),
        Some(Executed::statement(
            "UPDATE users SET domain = 'x' WHERE user = 'u'"
        ))
    );
}
