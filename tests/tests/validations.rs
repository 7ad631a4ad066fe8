use cassandra_record::{row, Model, Record};
use pretty_assertions::assert_eq;
use tests::{models::Post, DbTest};

const ID: &str = "0f0e0d0c-0b0a-0908-0706-050403020100";

#[tokio::test]
async fn invalid_save_returns_false_without_statements() {
    let test = DbTest::new().await;

    let mut post = Record::<Post>::with(row! { "id" => ID, "title" => "   " }).unwrap();

    assert!(!post.save(&test.db).await.unwrap());
    assert!(!post.is_persisted());
    assert_eq!(post.errors().get("title"), ["can't be blank"]);
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn strict_save_fails_with_full_messages() {
    let test = DbTest::new().await;

    let mut post = Record::<Post>::with(row! { "id" => ID }).unwrap();
    let err = post.save_strict(&test.db).await.unwrap_err();

    assert!(err.is_record_invalid());
    assert_eq!(err.to_string(), "record invalid: title can't be blank");
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn create_returns_the_unsaved_record_when_invalid() {
    let test = DbTest::new().await;

    let post = Post::create(&test.db, row! { "id" => ID }).await.unwrap();
    assert!(post.is_new_record());
    assert_eq!(post.errors().len(), 1);

    let err = Post::create_strict(&test.db, row! { "id" => ID })
        .await
        .unwrap_err();
    assert!(err.is_record_invalid());

    assert!(test.log().is_empty());
}

#[tokio::test]
async fn errors_reset_on_next_validation() {
    let test = DbTest::new().await;

    let mut post = Record::<Post>::with(row! { "id" => ID }).unwrap();
    assert!(!post.save(&test.db).await.unwrap());

    post.set("title", "now valid").unwrap();
    assert!(post.save(&test.db).await.unwrap());
    assert!(post.errors().is_empty());
    assert_eq!(test.log().len(), 1);
}

#[tokio::test]
async fn update_strict_validates_in_update_context() {
    let test = DbTest::new().await;

    let mut post = Post::create_strict(&test.db, row! { "id" => ID, "title" => "t" })
        .await
        .unwrap();
    test.log().clear();

    let err = post
        .update_strict(&test.db, row! { "title" => "" })
        .await
        .unwrap_err();
    assert!(err.is_record_invalid());
    assert!(test.log().is_empty());

    // The assignment stays pending
    assert!(post.is_changed());
}
