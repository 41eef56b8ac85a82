//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database with migrations applied. Run with
//! `DATABASE_URL` pointing at a server and `cargo test -- --ignored`.

mod common;

use shorturl::application::services::RegistrationService;
use shorturl::domain::entities::NewUrlRecord;
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .create(NewUrlRecord::next("https://example.com", 0))
        .await
        .unwrap();

    assert_eq!(record.short_url, 1);
    assert_eq!(record.original_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_short_url(pool: PgPool) {
    common::insert_pg_record(&pool, 7, "https://example.com/seven").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_short_url(7).await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com/seven");

    assert!(repo.find_by_short_url(8).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_original_url_is_exact(pool: PgPool) {
    common::insert_pg_record(&pool, 1, "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let found = repo
        .find_by_original_url("https://example.com")
        .await
        .unwrap();
    assert_eq!(found.unwrap().short_url, 1);

    for other in ["https://example.com/", "HTTPS://example.com", "https://Example.com"] {
        assert!(repo.find_by_original_url(other).await.unwrap().is_none());
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_count(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);

    common::insert_pg_record(&pool, 1, "https://a.example.com").await;
    common::insert_pg_record(&pool, 2, "https://b.example.com").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_short_url_is_conflict(pool: PgPool) {
    common::insert_pg_record(&pool, 1, "https://a.example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUrlRecord::next("https://b.example.com", 0))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_original_url_is_conflict(pool: PgPool) {
    common::insert_pg_record(&pool, 1, "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUrlRecord::next("https://example.com", 1))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_non_positive_short_url_is_rejected(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUrlRecord {
            original_url: "https://example.com".to_string(),
            short_url: 0,
        })
        .await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_or_create(pool: PgPool) {
    common::insert_pg_record(&pool, 1, "https://a.example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo.find_or_create("https://b.example.com").await.unwrap();
    assert_eq!(created.short_url, 2);

    let existing = repo.find_or_create("https://a.example.com").await.unwrap();
    assert_eq!(existing.short_url, 1);

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_registrations_all_succeed(pool: PgPool) {
    let service = Arc::new(RegistrationService::new(Arc::new(PgUrlRepository::new(
        Arc::new(pool),
    ))));

    let handles: Vec<_> = (0..24)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .register(&format!("https://e{}.example.com", i % 16))
                    .await
            })
        })
        .collect();

    let mut codes = std::collections::HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap().unwrap().short_url);
    }

    assert_eq!(codes, (1..=16).collect::<std::collections::HashSet<i64>>());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_registration_gives_up_on_code_gap(pool: PgPool) {
    // Count is 1 but code 2 is taken.
    common::insert_pg_record(&pool, 2, "https://taken.example.com").await;
    let service = RegistrationService::new(Arc::new(PgUrlRepository::new(Arc::new(pool))));

    let result = service.register("https://example.com").await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_register_through_api(pool: PgPool) {
    use axum::{Router, routing::{get, post}};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use shorturl::api::handlers::{redirect_handler, shorten_handler};

    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .with_state(common::create_pg_state(pool));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org")])
        .await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
    );

    let response = server.get("/api/shorturl/1").await;
    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://www.freecodecamp.org");
}
