use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use whub_database::Database;
use whub_server::{Server, app};

async fn router(name: &str) -> Router {
    let db = Database::builder().url("mem://").session("http", name).init().await.unwrap();
    db.import_words(["stone", "notes", "onset", "tones", "one", "ten", "toe"]).await.unwrap();
    let server = Server::builder().database(db).build().await.unwrap();
    app(server.state().clone())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, origin, serde_json::from_slice(&bytes).unwrap())
}

fn post(body: &str) -> Request<Body> {
    Request::post("/api/lookup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_the_word_store() {
    let (status, _, body) =
        send(router("health").await, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn post_lookup_returns_the_envelope() {
    let (status, origin, body) =
        send(router("post").await, post(r#"{"letters": "STONE", "minLength": 5}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin.as_deref(), Some("*"));
    assert_eq!(body["result"]["total"], 7);
    assert_eq!(body["query"]["letters"], "enost");
    assert_eq!(body["query"]["minLength"], 5);
}

#[tokio::test]
async fn get_lookup_reads_query_parameters() {
    let request = Request::get("/api/lookup?queryType=startsWith&startsWith=NE&maxLength=3")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(router("get").await, request).await;

    assert_eq!(status, StatusCode::OK);
    let mut items: Vec<&str> =
        body["result"]["items"].as_array().unwrap().iter().filter_map(Value::as_str).collect();
    items.sort_unstable();
    assert_eq!(items, ["one", "ten"]);
}

#[tokio::test]
async fn invalid_queries_are_400_with_a_message() {
    let (status, origin, body) =
        send(router("invalid").await, post(r#"{"letters": "abc", "maxLength": 8}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(origin.as_deref(), Some("*"));
    assert_eq!(body, json!("Invalid maxLength arg, maxLength must be between 1 and 7"));
}

#[tokio::test]
async fn unreadable_bodies_are_400() {
    let (status, _, body) = send(router("garbage").await, post("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_string());
}
