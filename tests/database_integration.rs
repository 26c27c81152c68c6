//! Database integration tests against DuckDB files
//!
//! Each test creates its own database file in a temporary directory.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use solidafy_paginate::cli::{router, AppState, ServerConfig};
use solidafy_paginate::finders::{PaginateArgs, SqlFinder, SqlQuery};
use solidafy_paginate::{PaginateConfig, Paginated};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

fn create_database(path: &Path, rows: u32) {
    let finder = SqlFinder::open(path).unwrap();
    finder
        .execute_batch(&format!(
            "CREATE TABLE articles AS \
             SELECT i AS id, 'Article ' || CAST(i AS VARCHAR) AS title \
             FROM range(1, {}) t(i);",
            rows + 1
        ))
        .unwrap();
}

#[test]
fn test_file_database_pagination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("articles.duckdb");
    create_database(&path, 42);

    let finder = SqlFinder::open(&path).unwrap();
    let query = SqlQuery::table("articles")
        .unwrap()
        .order_by("id", false)
        .unwrap();
    let config = PaginateConfig::default();

    let first = finder
        .paginate(&query, &PaginateArgs::new(), &config)
        .unwrap();
    assert_eq!(first.len(), 30);
    assert_eq!(first.total_entries(), 42);
    assert_eq!(first.total_pages(), 2);

    let second = finder
        .paginate(&query, &PaginateArgs::new().page("2"), &config)
        .unwrap();
    assert_eq!(second.len(), 12);
    assert_eq!(second[0]["title"], "Article 31");
    assert_eq!(second.next_page(), None);
}

#[test]
fn test_missing_table_is_rejected_at_query_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.duckdb");
    let finder = SqlFinder::open(&path).unwrap();

    let result = finder.paginate(
        &SqlQuery::table("articles").unwrap(),
        &PaginateArgs::new(),
        &PaginateConfig::default(),
    );
    assert!(result.is_err());
}

#[tokio::test]
async fn test_server_lists_database_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("articles.duckdb");
    create_database(&path, 15);

    let server = ServerConfig {
        port: 0,
        database: Some(path),
        table: Some("articles".to_string()),
        records: 0,
    };
    let config = PaginateConfig {
        per_page: 10,
        ..PaginateConfig::default()
    };
    let state = AppState::from_config(&server, config).unwrap();
    let app = router(Arc::new(state));

    let request = Request::builder()
        .uri("/records?page=2")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    let data = &body["data"];

    assert_eq!(data["items"].as_array().unwrap().len(), 5);
    assert_eq!(data["pagination"]["total_entries"], 15);
    assert_eq!(data["pagination"]["next_page"], Value::Null);
}

#[test]
fn test_database_requires_table() {
    let server = ServerConfig {
        port: 0,
        database: Some("unused.duckdb".into()),
        table: None,
        records: 0,
    };
    assert!(AppState::from_config(&server, PaginateConfig::default()).is_err());
}
