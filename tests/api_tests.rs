//! JSON API tests

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{json_request, TestApp};
use serde_json::{json, Value};

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "year": 1965,
        "genre": "Sci-Fi",
        "read": false
    })
}

fn nineteen_eighty_four() -> Value {
    json!({
        "title": "1984",
        "author": "Orwell",
        "year": 1949,
        "genre": "Dystopian",
        "read": true
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);
}

#[tokio::test]
async fn test_example_scenario() {
    let app = TestApp::new().await;

    let (status, body) = app.send(json_request("POST", "/api/v1/books", dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), dune());

    let (_, body) = app.get("/api/v1/stats").await;
    let stats: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["read_percentage"], 0.0);

    app.send(json_request("POST", "/api/v1/books", nineteen_eighty_four()))
        .await;
    let (_, body) = app.get("/api/v1/stats").await;
    let stats: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["read_percentage"], 50.0);

    let (status, _) = app
        .send(
            Request::delete("/api/v1/books?title=dune")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get("/api/v1/books").await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([nineteen_eighty_four()])
    );

    // file on disk matches
    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(app.library_file()).unwrap()).unwrap();
    assert_eq!(saved, json!([nineteen_eighty_four()]));
}

#[tokio::test]
async fn test_remove_not_found() {
    let app = TestApp::new().await;
    app.send(json_request("POST", "/api/v1/books", dune())).await;

    let (status, body) = app
        .send(
            Request::delete("/api/v1/books?title=Nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"], "NoSuchBook");

    let (_, body) = app.get("/api/v1/books").await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([dune()]));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = TestApp::new().await;
    app.send(json_request("POST", "/api/v1/books", dune())).await;
    app.send(json_request("POST", "/api/v1/books", nineteen_eighty_four()))
        .await;

    for query in ["dune", "DUNE", "herb"] {
        let (status, body) = app.get(&format!("/api/v1/books/search?q={query}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!([dune()]),
            "query {query}"
        );
    }

    let (_, body) = app.get("/api/v1/books/search?q=tolkien").await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn test_non_integer_year_is_rejected() {
    let app = TestApp::new().await;
    let mut book = dune();
    book["year"] = json!("nineteen sixty-five");

    let (status, body) = app.send(json_request("POST", "/api/v1/books", book)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid publication year"));

    let (_, body) = app.get("/api/v1/books").await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_numeric_text_year_is_accepted() {
    let app = TestApp::new().await;
    let mut book = dune();
    book["year"] = json!("1965");

    let (status, body) = app.send(json_request("POST", "/api/v1/books", book)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), dune());
}

#[tokio::test]
async fn test_client_cannot_attach_local_files() {
    let app = TestApp::new().await;
    let secret = app.dir.path().join("secret.txt");
    std::fs::write(&secret, "TOP-SECRET-CONTENT").unwrap();

    let mut book = dune();
    book["file_path"] = json!(secret.to_string_lossy());
    let (status, body) = app.send(json_request("POST", "/api/v1/books", book)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(serde_json::from_str::<Value>(&body).unwrap().get("file_path").is_none());

    let (status, html) = app.get("/books/0/read").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!html.contains("TOP-SECRET-CONTENT"));
}

#[tokio::test]
async fn test_books_survive_restart() {
    let app = TestApp::new().await;
    app.send(json_request("POST", "/api/v1/books", dune())).await;

    let restarted = TestApp::with_dir(app.dir).await;
    let (_, body) = restarted.get("/api/v1/books").await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([dune()]));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/books"].is_object());
    assert!(doc["paths"]["/stats"].is_object());
}
