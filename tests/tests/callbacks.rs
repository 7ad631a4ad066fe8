use cassandra_record::{row, Model, Record, ValidationContext};
use pretty_assertions::assert_eq;
use tests::{
    models::{take_hooks, Post},
    DbTest,
};

const ID: &str = "0f0e0d0c-0b0a-0908-0706-050403020100";

#[tokio::test]
async fn create_update_destroy_orderings() {
    let test = DbTest::new().await;
    take_hooks();

    let mut post = Post::create_strict(&test.db, row! { "id" => ID, "title" => "hello" })
        .await
        .unwrap();

    assert_eq!(
        take_hooks(),
        [
            "before_validation",
            "after_validation",
            "before_save",
            "before_create",
            "after_create",
            "after_save",
        ]
    );

    assert!(post.update(&test.db, row! { "body" => "text" }).await.unwrap());

    assert_eq!(
        take_hooks(),
        [
            "before_validation",
            "after_validation",
            "before_save",
            "before_update",
            "after_update",
            "after_save",
        ]
    );

    post.destroy(&test.db).await.unwrap();

    assert_eq!(take_hooks(), ["before_destroy", "after_destroy"]);
}

#[tokio::test]
async fn update_hooks_run_without_changes() {
    let test = DbTest::new().await;

    let mut post = Post::create_strict(&test.db, row! { "id" => ID, "title" => "hello" })
        .await
        .unwrap();
    take_hooks();
    test.log().clear();

    assert!(post.save(&test.db).await.unwrap());

    assert_eq!(
        take_hooks(),
        [
            "before_validation",
            "after_validation",
            "before_save",
            "before_update",
            "after_update",
            "after_save",
        ]
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn delete_skips_hooks() {
    let test = DbTest::new().await;

    let mut post = Post::create_strict(&test.db, row! { "id" => ID, "title" => "hello" })
        .await
        .unwrap();
    take_hooks();

    post.delete(&test.db).await.unwrap();

    assert!(take_hooks().is_empty());
    assert!(post.is_destroyed());
}

#[tokio::test]
async fn invalid_save_stops_after_validation() {
    let test = DbTest::new().await;
    take_hooks();

    let mut post = Record::<Post>::with(row! { "id" => ID }).unwrap();
    assert!(!post.save(&test.db).await.unwrap());

    assert_eq!(take_hooks(), ["before_validation", "after_validation"]);
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn failing_hook_aborts_the_save() {
    let test = DbTest::new().await;
    take_hooks();

    let mut post = Record::<Post>::with(row! { "id" => ID, "title" => "forbidden" }).unwrap();
    let err = post.save(&test.db).await.unwrap_err();

    assert!(err.is_callback());
    assert_eq!(
        err.to_string(),
        "before_save callback aborted the operation: forbidden title"
    );
    assert!(!post.is_persisted());
    assert!(test.log().is_empty());

    // Handlers registered before the failing one have run, later ones have not
    assert_eq!(
        take_hooks(),
        ["before_validation", "after_validation", "before_save"]
    );
}

#[tokio::test]
async fn is_valid_runs_validation_hooks_only() {
    let mut post = Record::<Post>::new();
    take_hooks();

    assert!(!post.is_valid(ValidationContext::Create).unwrap());
    assert_eq!(take_hooks(), ["before_validation", "after_validation"]);
    assert_eq!(post.errors().full_messages(), ["title can't be blank"]);
}
