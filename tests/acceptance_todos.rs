use axum::body::to_bytes;
use axum::Router;
use todo_web::application::todo_service::TodoServiceImpl;
use todo_web::http::routing::{self, todos};
use todo_web::infrastructure::memory_store::MemoryTodoStore;

fn app() -> Router {
    let service = TodoServiceImpl::new(MemoryTodoStore::new());
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn acceptance_add_done_delete_clear() {
    let app = app();

    let res = request(&app, "GET", "/health", None).await;
    assert_eq!(res.status(), 200);

    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("Nothing here."));

    // add
    let res = request(&app, "POST", "/add", Some("todo=Buy+milk")).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/?success=Todo+added+successfully!");

    // following the redirect renders the flash and the new item
    let body = body_text(request(&app, "GET", location(&res), None).await).await;
    assert!(body.contains("Todo added successfully!"));
    assert!(body.contains("Buy milk"));
    assert!(body.contains("/done?id=1"));

    // mark done
    let res = request(&app, "GET", "/done?id=1", None).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/?success=Todo+marked+as+done!");
    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("<s>Buy milk</s>"));

    // delete
    let res = request(&app, "GET", "/delete?id=1", None).await;
    assert_eq!(res.status(), 303);
    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(!body.contains("Buy milk"));

    // clear
    request(&app, "POST", "/add", Some("todo=Walk+dog")).await;
    let res = request(&app, "GET", "/clear", None).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/?success=All+todos+cleared!");
    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("Nothing here."));
}

#[tokio::test]
async fn acceptance_add_rejects_bad_input() {
    let app = app();

    // whitespace-only text trims to empty
    let res = request(&app, "POST", "/add", Some("todo=++")).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/?error=Input+cannot+be+empty");

    // missing field
    let res = request(&app, "POST", "/add", Some("")).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/?error=Input+cannot+be+empty");

    // symbol-only text
    let res = request(&app, "POST", "/add", Some("todo=%21%21%21")).await;
    assert_eq!(res.status(), 303);
    assert_eq!(
        location(&res),
        "/?error=Input+cannot+contain+only+symbols+or+special+characters"
    );

    // nothing was stored
    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("Nothing here."));
}

#[tokio::test]
async fn acceptance_non_post_add_redirects_without_effect() {
    let app = app();

    let res = request(&app, "GET", "/add?todo=sneaky", None).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/");

    let res = request(&app, "PUT", "/add", Some("todo=sneaky")).await;
    assert_eq!(res.status(), 303);
    assert_eq!(location(&res), "/");

    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(!body.contains("sneaky"));
}

#[tokio::test]
async fn acceptance_unknown_and_bad_ids_are_noops() {
    let app = app();
    request(&app, "POST", "/add", Some("todo=Buy+milk")).await;

    let res = request(&app, "GET", "/done?id=99", None).await;
    assert_eq!(res.status(), 303);
    let res = request(&app, "GET", "/done?id=abc", None).await;
    assert_eq!(res.status(), 303);
    let res = request(&app, "GET", "/delete?id=abc", None).await;
    assert_eq!(res.status(), 303);

    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("Buy milk"));
    assert!(!body.contains("<s>"));
}

#[tokio::test]
async fn acceptance_filter_and_paginate() {
    let app = app();
    for i in 1..=11 {
        request(&app, "POST", "/add", Some(&format!("todo=task+{i:02}"))).await;
    }
    request(&app, "POST", "/add", Some("todo=Buy+milk")).await;

    // page 1 holds the first ten items
    let body = body_text(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("task 01"));
    assert!(body.contains("task 10"));
    assert!(!body.contains("task 11"));
    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains("<a href=\"/?page=2\">Next</a>"));

    // page 2 holds the remainder
    let body = body_text(request(&app, "GET", "/?page=2", None).await).await;
    assert!(body.contains("task 11"));
    assert!(body.contains("Buy milk"));
    assert!(!body.contains("task 01"));
    assert!(body.contains("<a href=\"/?page=1\">Prev</a>"));

    // out-of-range and unparsable pages degrade, never error
    let body = body_text(request(&app, "GET", "/?page=99", None).await).await;
    assert!(body.contains("Nothing here."));
    let res = request(&app, "GET", "/?page=abc", None).await;
    assert_eq!(res.status(), 200);

    // keyword filter, case-insensitive
    let body = body_text(request(&app, "GET", "/?q=MILK", None).await).await;
    assert!(body.contains("Buy milk"));
    assert!(!body.contains("task 01"));
}

async fn request(app: &Router, method: &str, path: &str, form: Option<&str>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match form {
        Some(body) => req
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

fn location(res: &hyper::Response<axum::body::Body>) -> &str {
    res.headers().get("location").unwrap().to_str().unwrap()
}

async fn body_text(res: hyper::Response<axum::body::Body>) -> String {
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
