use axum::extract::{Form, Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{Html, Redirect};
use axum::routing::{any, get};
use axum::Router;
use serde::Deserialize;

use crate::application::input;
use crate::application::todo_service::TodoService;
use crate::http::render;
use crate::http::types::TodoPageView;

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(list_todos::<S>))
        .route("/add", any(add_todo::<S>))
        .route("/done", get(mark_done::<S>))
        .route("/delete", get(delete_todo::<S>))
        .route("/clear", get(clear_todos::<S>))
        .with_state(state)
}

#[derive(Deserialize)]
pub struct ListParams {
    q: Option<String>,
    page: Option<String>,
    error: Option<String>,
    success: Option<String>,
}

#[derive(Deserialize)]
pub struct AddForm {
    todo: Option<String>,
}

#[derive(Deserialize)]
pub struct IdParams {
    id: Option<String>,
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let keyword = params.q.as_deref().unwrap_or("").trim().to_string();
    let page = parse_page(params.page.as_deref());
    let data = state.service.list_page(&keyword, page).await.map_err(internal_error)?;
    let view = TodoPageView {
        todos: data.items,
        keyword,
        page,
        total_pages: data.total_pages,
        error: params.error.filter(|m| !m.is_empty()),
        success: params.success.filter(|m| !m.is_empty()),
    };
    Ok(render::index(&view))
}

async fn add_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    method: Method,
    form: Option<Form<AddForm>>,
) -> Result<Redirect, (StatusCode, String)> {
    if method != Method::POST {
        return Ok(Redirect::to("/"));
    }
    let raw = form.and_then(|Form(f)| f.todo).unwrap_or_default();
    match input::validate_text(&raw) {
        Ok(text) => {
            state.service.add(text).await.map_err(internal_error)?;
            Ok(flash_success("Todo added successfully!"))
        }
        Err(err) => {
            tracing::debug!(%err, "rejected todo submission");
            Ok(flash_error(&err.to_string()))
        }
    }
}

async fn mark_done<S: TodoService>(
    State(state): State<AppState<S>>,
    Query(params): Query<IdParams>,
) -> Result<Redirect, (StatusCode, String)> {
    let id = parse_id(params.id.as_deref());
    state.service.mark_done(id).await.map_err(internal_error)?;
    Ok(flash_success("Todo marked as done!"))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Query(params): Query<IdParams>,
) -> Result<Redirect, (StatusCode, String)> {
    let id = parse_id(params.id.as_deref());
    state.service.delete(id).await.map_err(internal_error)?;
    Ok(flash_success("Todo deleted successfully!"))
}

async fn clear_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Redirect, (StatusCode, String)> {
    state.service.clear().await.map_err(internal_error)?;
    Ok(flash_success("All todos cleared!"))
}

fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok()).filter(|&p| p > 0).unwrap_or(1)
}

// Unparsable ids fall back to 0, which never matches a stored item.
fn parse_id(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn flash_success(msg: &str) -> Redirect {
    Redirect::to(&format!("/?success={}", plus_encode(msg)))
}

fn flash_error(msg: &str) -> Redirect {
    Redirect::to(&format!("/?error={}", plus_encode(msg)))
}

// Flash messages are fixed ASCII strings; space-to-plus is the only encoding
// they need.
fn plus_encode(msg: &str) -> String {
    msg.replace(' ', "+")
}

fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", e))
}
