//! Repository tests against an in-memory SQLite database.

use users_api::errors::StoreError;
use users_api::models::{UserFilter, UserInput};
use users_api::repositories::{UserRepository, UserStore};

async fn seeded_repository() -> UserRepository {
    let repository = UserRepository::open_in_memory().await.unwrap();
    for (name, email) in [
        ("John Smith", "john@smith.com"),
        ("Paul Smith", "paul@smith.com"),
        ("Vernon Miller", "vernon@miller.com"),
    ] {
        repository
            .create(&UserInput::new(name, email))
            .await
            .unwrap();
    }
    repository
}

fn names(users: &[users_api::models::User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

#[actix_web::test]
async fn create_assigns_id_and_equal_timestamps() {
    let repository = UserRepository::open_in_memory().await.unwrap();

    let user = repository
        .create(&UserInput::new("John Smith", "john@smith.com"))
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
    assert_eq!(user.name, "John Smith");
    assert_eq!(user.email, "john@smith.com");
    assert_eq!(user.created_at, user.updated_at);
}

#[actix_web::test]
async fn find_unique_returns_stored_record() {
    let repository = UserRepository::open_in_memory().await.unwrap();
    let created = repository
        .create(&UserInput::new("John Smith", "john@smith.com"))
        .await
        .unwrap();

    let found = repository.find_unique(&created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repository.find_unique("does-not-exist").await.unwrap();
    assert_eq!(missing, None);
}

#[actix_web::test]
async fn update_replaces_fields_and_refreshes_timestamp() {
    let repository = UserRepository::open_in_memory().await.unwrap();
    let created = repository
        .create(&UserInput::new("John Smith", "john@smith.com"))
        .await
        .unwrap();

    let updated = repository
        .update(&created.id, &UserInput::new("Nick Jonas", "nick@jonas.com"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Nick Jonas");
    assert_eq!(updated.email, "nick@jonas.com");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let reloaded = repository.find_unique(&created.id).await.unwrap();
    assert_eq!(reloaded, Some(updated));
}

#[actix_web::test]
async fn update_unknown_id_is_not_found() {
    let repository = seeded_repository().await;

    let err = repository
        .update("does-not-exist", &UserInput::new("Nick Jonas", "nick@jonas.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound));
}

#[actix_web::test]
async fn find_many_all_in_insertion_order() {
    let repository = seeded_repository().await;

    let users = repository.find_many(&UserFilter::All).await.unwrap();
    assert_eq!(names(&users), vec!["John Smith", "Paul Smith", "Vernon Miller"]);
}

#[actix_web::test]
async fn find_many_substring_is_case_insensitive() {
    let repository = seeded_repository().await;

    let users = repository
        .find_many(&UserFilter::NameContains("smith".to_string()))
        .await
        .unwrap();
    assert_eq!(names(&users), vec!["John Smith", "Paul Smith"]);

    let users = repository
        .find_many(&UserFilter::NameContains("n Mil".to_string()))
        .await
        .unwrap();
    assert_eq!(names(&users), vec!["Vernon Miller"]);

    let users = repository
        .find_many(&UserFilter::NameContains("noone".to_string()))
        .await
        .unwrap();
    assert!(users.is_empty());
}

#[actix_web::test]
async fn find_many_treats_like_wildcards_literally() {
    let repository = UserRepository::open_in_memory().await.unwrap();
    for name in ["50% off", "500 Club", "snake_case", "snakeXcase"] {
        repository
            .create(&UserInput::new(name, "someone@example.com"))
            .await
            .unwrap();
    }

    let users = repository
        .find_many(&UserFilter::NameContains("0%".to_string()))
        .await
        .unwrap();
    assert_eq!(names(&users), vec!["50% off"]);

    let users = repository
        .find_many(&UserFilter::NameContains("e_c".to_string()))
        .await
        .unwrap();
    assert_eq!(names(&users), vec!["snake_case"]);
}

#[actix_web::test]
async fn ensure_schema_is_idempotent() {
    let repository = seeded_repository().await;

    repository.ensure_schema().await.unwrap();

    let users = repository.find_many(&UserFilter::All).await.unwrap();
    assert_eq!(users.len(), 3);
}
