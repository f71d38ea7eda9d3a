//! End-to-end tests for the guestbook web application
//!
//! These tests require:
//! - Running PostgreSQL instance with the guests table
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test web_tests

use std::sync::OnceLock;

use guestbook_core::GuestRepository;
use integration_tests::{assert_status, check_test_env, SignForm, TestServer};
use reqwest::StatusCode;
use tokio::sync::{Mutex, MutexGuard};

/// Serialize tests that observe table-wide state (row counts)
async fn test_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().await
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body = assert_status(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("\"database\":true"));
}

// ============================================================================
// Guestbook Page Tests
// ============================================================================

#[tokio::test]
async fn test_get_renders_page() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    let body = assert_status(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("guestbook"));
}

#[tokio::test]
async fn test_post_redirects_to_page() {
    if !check_test_env() {
        return;
    }

    let _guard = test_lock().await;
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_form("/", &SignForm::unique())
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn test_posted_entry_appears_at_top_of_list() {
    if !check_test_env() {
        return;
    }

    let _guard = test_lock().await;
    let server = TestServer::start().await.expect("Failed to start server");

    let earlier = SignForm::unique();
    let latest = SignForm::unique();
    server.post_form("/", &earlier).await.expect("Request failed");
    server.post_form("/", &latest).await.expect("Request failed");

    let response = server.get("/").await.expect("Request failed");
    let body = assert_status(response, StatusCode::OK).await.unwrap();

    let pos_latest = body.find(&latest.name).expect("latest entry not rendered");
    let pos_earlier = body.find(&earlier.name).expect("earlier entry not rendered");
    assert!(pos_latest < pos_earlier, "entries must render newest first");
}

#[tokio::test]
async fn test_empty_name_inserts_no_row() {
    if !check_test_env() {
        return;
    }

    let _guard = test_lock().await;
    let server = TestServer::start().await.expect("Failed to start server");
    let repo = server.repo();

    let before = repo.count().await.expect("count failed");
    let response = server
        .post_form("/", &SignForm::empty_name())
        .await
        .expect("Request failed");
    let after = repo.count().await.expect("count failed");

    // The request still redirects; it just does not persist anything
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_empty_message_inserts_no_row() {
    if !check_test_env() {
        return;
    }

    let _guard = test_lock().await;
    let server = TestServer::start().await.expect("Failed to start server");
    let repo = server.repo();

    let before = repo.count().await.expect("count failed");
    let response = server
        .post_form("/", &SignForm::empty_message())
        .await
        .expect("Request failed");
    let after = repo.count().await.expect("count failed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_missing_field_inserts_no_row() {
    if !check_test_env() {
        return;
    }

    let _guard = test_lock().await;
    let server = TestServer::start().await.expect("Failed to start server");
    let repo = server.repo();

    let before = repo.count().await.expect("count failed");
    let response = server
        .post_form("/", &[("name", "only a name")])
        .await
        .expect("Request failed");
    let after = repo.count().await.expect("count failed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_get_never_mutates_storage() {
    if !check_test_env() {
        return;
    }

    let _guard = test_lock().await;
    let server = TestServer::start().await.expect("Failed to start server");
    let repo = server.repo();

    let before = repo.count().await.expect("count failed");
    for _ in 0..3 {
        let response = server.get("/").await.expect("Request failed");
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let after = repo.count().await.expect("count failed");

    assert_eq!(before, after);
}
