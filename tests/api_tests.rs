use axum_test::TestServer;
use serde_json::{json, Value};

use booklist_api::api::{create_router, AppState, ViewSettings};

fn create_test_server() -> TestServer {
    let state = AppState::new();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn book(id: u64, title: &str, author: &str, shelf: &str, genres: &[&str], rating: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": { "fullName": author },
        "predefinedShelf": { "shelfName": shelf },
        "genres": genres,
        "rating": rating
    })
}

async fn seed_catalog(server: &TestServer) {
    let books = [
        book(1, "Zoo", "A", "Read", &["sci-fi"], "4/5"),
        book(2, "Apple", "B", "To Read", &["drama"], "unrated"),
        book(3, "Zebra Crossing", "A", "Reading", &["sci-fi", "drama"], "2/5"),
    ];

    for record in books {
        server
            .post("/books")
            .json(&record)
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }
}

async fn open_view(server: &TestServer, search_text: &str) -> Value {
    let response = server
        .post("/views")
        .json(&json!({ "search_text": search_text }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

fn row_titles(view: &Value) -> Vec<String> {
    view["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "7f1f9a52-5a3b-4f0a-9d2e-2b8e0f1c9a11";

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(id),
        )
        .await;

    assert_eq!(response.header("x-request-id"), id);
}

#[tokio::test]
async fn test_create_and_search_books() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let response = server.get("/books").await;
    response.assert_status_ok();
    let books: Vec<Value> = response.json();
    assert_eq!(books.len(), 3);

    let response = server.get("/books").add_query_param("q", "ZE").await;
    let books: Vec<Value> = response.json();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Zebra Crossing");
}

#[tokio::test]
async fn test_duplicate_book_is_rejected() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let response = server
        .post("/books")
        .json(&book(1, "Another Zoo", "C", "Read", &[], "unrated"))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_view_rows_and_links() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let view = open_view(&server, "").await;
    assert_eq!(row_titles(&view), vec!["Zoo", "Apple", "Zebra Crossing"]);
    assert!(view["sort"].as_array().unwrap().is_empty());
    assert_eq!(view["rows"][0]["link"], "/book-overview/1");
    assert_eq!(view["rows"][2]["genre"], "sci-fi,drama");
}

#[tokio::test]
async fn test_view_filters_on_open() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let view = open_view(&server, "z").await;
    assert_eq!(row_titles(&view), vec!["Zoo", "Zebra Crossing"]);
    assert_eq!(view["search_text"], "z");
}

#[tokio::test]
async fn test_sort_toggle_cycle() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let view = open_view(&server, "").await;
    let id = view["id"].as_str().unwrap().to_string();
    let path = format!("/views/{}/sort/title", id);

    let view: Value = server.post(&path).await.json();
    assert_eq!(row_titles(&view), vec!["Apple", "Zebra Crossing", "Zoo"]);
    assert_eq!(view["indicators"]["title"], "up");

    let view: Value = server.post(&path).await.json();
    assert_eq!(row_titles(&view), vec!["Zoo", "Zebra Crossing", "Apple"]);
    assert_eq!(view["indicators"]["title"], "down");

    let view: Value = server
        .post(&format!("/views/{}/sort/author", id))
        .await
        .json();
    assert_eq!(
        view["sort"],
        json!([
            { "column": "title", "ascending": false },
            { "column": "author", "ascending": true }
        ])
    );

    server.post(&path).await;
    let view: Value = server.get(&format!("/views/{}", id)).await.json();
    assert_eq!(view["sort"], json!([{ "column": "author", "ascending": true }]));
    assert!(view["indicators"].get("title").is_none());
}

#[tokio::test]
async fn test_rating_sort_puts_unrated_last() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let view = open_view(&server, "").await;
    let id = view["id"].as_str().unwrap();
    let path = format!("/views/{}/sort/rating", id);

    let ascending: Value = server.post(&path).await.json();
    assert_eq!(row_titles(&ascending), vec!["Zebra Crossing", "Zoo", "Apple"]);

    let descending: Value = server.post(&path).await.json();
    assert_eq!(row_titles(&descending), vec!["Zoo", "Zebra Crossing", "Apple"]);
}

#[tokio::test]
async fn test_unknown_column_sorts_by_title() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let view = open_view(&server, "").await;
    let id = view["id"].as_str().unwrap();

    let view: Value = server
        .post(&format!("/views/{}/sort/isbn", id))
        .await
        .json();
    assert_eq!(row_titles(&view), vec!["Apple", "Zebra Crossing", "Zoo"]);
    assert_eq!(view["sort"][0]["column"], "title");
}

#[tokio::test]
async fn test_closed_view_is_gone() {
    let server = create_test_server();
    seed_catalog(&server).await;

    let view = open_view(&server, "").await;
    let path = format!("/views/{}", view["id"].as_str().unwrap());

    server
        .delete(&path)
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .get(&path)
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommendations_skip_seen_books() {
    let server = create_test_server();
    seed_catalog(&server).await;

    // Shelves mark 1 as read and 3 as in progress, leaving only Apple
    let response = server.post("/recommendations").json(&json!({})).await;
    response.assert_status_ok();
    let picks: Vec<Value> = response.json();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0]["id"], 2);

    let response = server
        .post("/recommendations")
        .json(&json!({ "read": [2], "reading": [] }))
        .await;
    let picks: Vec<Value> = response.json();
    assert!(picks.len() <= 2);
    assert!(picks.iter().all(|pick| pick["id"] != 2));
}

#[tokio::test]
async fn test_recommendations_on_empty_catalog() {
    let server = create_test_server();

    let response = server.post("/recommendations").json(&json!({})).await;
    response.assert_status_ok();
    let picks: Vec<Value> = response.json();
    assert!(picks.is_empty());
}

#[tokio::test]
async fn test_rating_sort_with_unparseable_numerator() {
    let server = create_test_server();
    seed_catalog(&server).await;
    for record in [
        book(4, "Odd", "C", "To Read", &["drama"], "great/5"),
        book(5, "Blank", "C", "To Read", &["drama"], "/5"),
        book(6, "Strange", "C", "To Read", &["drama"], "x/5"),
    ] {
        server
            .post("/books")
            .json(&record)
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let view = open_view(&server, "").await;
    let path = format!("/views/{}/sort/rating", view["id"].as_str().unwrap());

    let ascending: Value = server.post(&path).await.json();
    assert_eq!(
        row_titles(&ascending),
        vec!["Blank", "Zebra Crossing", "Zoo", "Odd", "Strange", "Apple"]
    );

    let descending: Value = server.post(&path).await.json();
    assert_eq!(
        row_titles(&descending),
        vec!["Zoo", "Zebra Crossing", "Blank", "Odd", "Strange", "Apple"]
    );
}

#[tokio::test]
async fn test_oldest_view_is_closed_past_capacity() {
    let settings = ViewSettings {
        max_open_views: 2,
        ..ViewSettings::default()
    };
    let server = TestServer::new(create_router(AppState::with_settings(settings))).unwrap();
    seed_catalog(&server).await;

    let first = open_view(&server, "").await;
    let second = open_view(&server, "").await;
    let third = open_view(&server, "").await;

    for (view, status) in [
        (&first, axum::http::StatusCode::NOT_FOUND),
        (&second, axum::http::StatusCode::OK),
        (&third, axum::http::StatusCode::OK),
    ] {
        server
            .get(&format!("/views/{}", view["id"].as_str().unwrap()))
            .await
            .assert_status(status);
    }
}
