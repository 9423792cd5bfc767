// ABOUTME: Common test utilities for integration tests
// ABOUTME: Provides test server setup, database helpers, and HTTP client utilities

use addrbook_addresses::DbState;
use addrbook_api::create_addresses_router;
use addrbook_storage::StorageConfig;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test context containing server URL and database pool
pub struct TestContext {
    pub base_url: String,
    #[allow(dead_code)]
    pub pool: SqlitePool,
    pub _temp_dir: TempDir,
}

/// Create a test server with an isolated database
pub async fn setup_test_server() -> TestContext {
    // Each test gets its own database file scoped to the TempDir
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig {
        path: Some(temp_dir.path().join("test_address_book.db")),
        ..StorageConfig::default()
    };

    let db_state = DbState::init(&config)
        .await
        .expect("Failed to initialize test database");
    let pool = db_state.pool.clone();

    let app = create_addresses_router().with_state(db_state);

    // Bind to random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    // Spawn server
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestContext {
        base_url,
        pool,
        _temp_dir: temp_dir,
    }
}

/// Helper to make GET requests
pub async fn get(base_url: &str, path: &str) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .get(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to make GET request")
}

/// Helper to make POST requests with JSON body
#[allow(dead_code)]
pub async fn post_json<T: serde::Serialize>(
    base_url: &str,
    path: &str,
    body: &T,
) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .post(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await
        .expect("Failed to make POST request")
}

/// Helper to make PUT requests with JSON body
#[allow(dead_code)]
pub async fn put_json<T: serde::Serialize>(
    base_url: &str,
    path: &str,
    body: &T,
) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .put(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await
        .expect("Failed to make PUT request")
}

/// Helper to make DELETE requests
#[allow(dead_code)]
pub async fn delete(base_url: &str, path: &str) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .delete(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to make DELETE request")
}

/// Count the address rows in the test database
#[allow(dead_code)]
pub async fn count_addresses(pool: &SqlitePool) -> i64 {
    use sqlx::Row;

    sqlx::query("SELECT COUNT(*) AS n FROM addresses")
        .fetch_one(pool)
        .await
        .expect("Failed to count addresses")
        .try_get("n")
        .unwrap()
}
