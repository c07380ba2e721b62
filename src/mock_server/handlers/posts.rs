//! Blog post endpoint handlers.
//!
//! Error responses are plain text, matching the real service.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::{MockState, SORT_FIELDS};
use crate::{BlogPost, CreateBlogInput, Page, UpdateBlogInput};

type SharedState = Arc<RwLock<MockState>>;

const DEFAULT_PAGE_SIZE: u32 = 10;
const LATEST_COUNT: u32 = 3;

/// Query parameters for the search endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSearchQuery {
    pub search_input: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub asc: Option<bool>,
}

fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let Some(required) = state.required_token.as_deref() else {
        return Ok(());
    };
    let expected = format!("Bearer {required}");
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if presented == Some(expected.as_str()) {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "Unauthorized").into_response())
    }
}

fn not_found(what: &str, id: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("{what} '{id}' not found")).into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, message.into()).into_response()
}

fn paginate(posts: Vec<&BlogPost>, page_number: u32, page_size: u32) -> Page<BlogPost> {
    let total = posts.len() as u64;
    let start = (page_number.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let items = posts
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();
    Page::new(items, page_number, page_size, total)
}

fn search(state: &MockState, query: PostSearchQuery, active_only: bool) -> Response {
    let Some(sort_by) = query.sort_by else {
        return bad_request("The parameter 'sortBy' must be defined and cannot be null.");
    };
    let Some(asc) = query.asc else {
        return bad_request("The parameter 'asc' must be defined and cannot be null.");
    };
    if !SORT_FIELDS.contains(&sort_by.as_str()) {
        return bad_request(format!("Cannot sort by '{sort_by}'"));
    }

    let page_number = query.page_number.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let posts = state.search(query.search_input.as_deref(), active_only, &sort_by, asc);

    (StatusCode::OK, Json(paginate(posts, page_number, page_size))).into_response()
}

/// POST /blog/newpost
pub async fn new_post(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(input): Json<CreateBlogInput>,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if input.title.trim().is_empty() {
        return bad_request("Title is required");
    }

    let post = state.create_post(input).clone();
    (StatusCode::CREATED, Json(post)).into_response()
}

/// PUT /blog/edit
pub async fn edit_post(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(input): Json<UpdateBlogInput>,
) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    let id = input.id.clone();
    match state.update_post(input) {
        Some(post) => (StatusCode::OK, Json(post.clone())).into_response(),
        None => not_found("Post", &id),
    }
}

async fn set_active(state: SharedState, headers: HeaderMap, id: String, active: bool) -> Response {
    let mut state = state.write().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    if state.set_active(&id, active) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("Post", &id)
    }
}

/// PUT /blog/activate/{blogId}
pub async fn activate_post(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    set_active(state, headers, id, true).await
}

/// PUT /blog/deactivate/{blogId}
pub async fn deactivate_post(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    set_active(state, headers, id, false).await
}

/// GET /blog/findpostbytitle
pub async fn find_post_by_title(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<PostSearchQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    search(&state, query, false)
}

/// GET /blog/getactivepost
pub async fn get_active_post(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<PostSearchQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    search(&state, query, true)
}

/// GET /blog/getpostbyid/{blogId}
pub async fn get_post_by_id(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    match state.get_post(&id) {
        Some(post) => (StatusCode::OK, Json(post.clone())).into_response(),
        None => not_found("Post", &id),
    }
}

/// GET /blog/getlastestpost/
pub async fn get_latest_post(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    let posts = state.search(None, true, "createdAt", false);
    (StatusCode::OK, Json(paginate(posts, 1, LATEST_COUNT))).into_response()
}

/// GET /blog/getpostbyfriendlyurl/{friendlyUrl}
pub async fn get_post_by_friendly_url(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }

    match state.get_post_by_friendly_url(&slug) {
        Some(post) => (StatusCode::OK, Json(post.clone())).into_response(),
        None => not_found("Post", &slug),
    }
}
