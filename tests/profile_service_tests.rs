use finprofile::{
    models::{ProfileUpdate, PROFILE_ID},
    repositories::user_repository::{SqliteUserRepository, UserRepository},
    services::profile_service::{ProfileService, ProfileServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn update(name: &str, email: &str, phone: &str) -> ProfileUpdate {
    ProfileUpdate {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
    }
}

#[tokio::test]
async fn test_get_profile_missing() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    let result = service.get_profile().await;
    assert!(matches!(result, Err(ProfileServiceError::UserNotFound)));
}

#[tokio::test]
async fn test_get_profile_ignores_other_rows() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::insert_test_user(&pool, 2, "Other", "other@example.com", "1")
        .await
        .unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    assert!(service.find_profile().await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_profile_success() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::seed_profile(&pool).await.unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    let updated = service
        .update_profile(update("A", "a@x.com", "123"))
        .await
        .unwrap();
    assert_eq!(updated.id, PROFILE_ID);

    let stored = service.get_profile().await.unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.name, "A");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.phone, "123");
}

#[tokio::test]
async fn test_update_profile_is_idempotent() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::seed_profile(&pool).await.unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    service
        .update_profile(update("A", "a@x.com", "123"))
        .await
        .unwrap();
    let once = service.get_profile().await.unwrap();

    service
        .update_profile(update("A", "a@x.com", "123"))
        .await
        .unwrap();
    let twice = service.get_profile().await.unwrap();

    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_update_profile_accepts_unvalidated_values() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::seed_profile(&pool).await.unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    service
        .update_profile(update("", "not-an-email", ""))
        .await
        .unwrap();

    let stored = service.get_profile().await.unwrap();
    assert_eq!(stored.name, "");
    assert_eq!(stored.email, "not-an-email");
}

#[tokio::test]
async fn test_update_profile_duplicate_email_fails() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::seed_profile(&pool).await.unwrap();
    test_helpers::insert_test_user(&pool, 2, "Other", "taken@example.com", "1")
        .await
        .unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    let result = service
        .update_profile(update("A", "taken@example.com", "123"))
        .await;
    assert!(matches!(
        result,
        Err(ProfileServiceError::RepositoryError(_))
    ));

    let stored = service.get_profile().await.unwrap();
    assert_eq!(stored.email, "jane@example.com");
}

#[tokio::test]
async fn test_update_profile_missing_field_fails() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::seed_profile(&pool).await.unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    let partial = ProfileUpdate {
        name: Some("A".to_string()),
        email: None,
        phone: Some("123".to_string()),
    };

    let result = service.update_profile(partial).await;
    assert!(result.is_err());

    let stored = service.get_profile().await.unwrap();
    assert_eq!(stored.name, "Jane Doe");
}

#[tokio::test]
async fn test_submit_form_without_profile_is_noop() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool.clone())));

    let shown = service
        .submit_profile_form(update("A", "a@x.com", "123"))
        .await
        .unwrap();
    assert!(shown.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_submit_form_keeps_record_on_write_failure() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::seed_profile(&pool).await.unwrap();
    test_helpers::insert_test_user(&pool, 2, "Other", "taken@example.com", "1")
        .await
        .unwrap();
    let service = ProfileService::new(Arc::new(SqliteUserRepository::new(pool)));

    let shown = service
        .submit_profile_form(update("A", "taken@example.com", "123"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(shown.email, "taken@example.com");

    let stored = service.get_profile().await.unwrap();
    assert_eq!(stored.email, "jane@example.com");
    assert_eq!(stored.name, "Jane Doe");
}

#[tokio::test]
async fn test_upsert_profile_creates_then_overwrites() {
    let (pool, _file) = test_helpers::create_test_db_file().await.unwrap();
    let repository = SqliteUserRepository::new(pool);

    let created = repository
        .upsert_profile(PROFILE_ID, "Jane", "jane@example.com", "1")
        .await
        .unwrap();
    assert_eq!(created.id, PROFILE_ID);

    let replaced = repository
        .upsert_profile(PROFILE_ID, "Janet", "janet@example.com", "2")
        .await
        .unwrap();
    assert_eq!(replaced.name, "Janet");
    assert_eq!(replaced.email, "janet@example.com");
    assert_eq!(replaced.phone, "2");
}
