use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{BookId, BookRecord, SortColumn, SortDirective, SortIndicator};
use crate::services::{filter_by_title, BookList, BookRow, ReadingHistory, Recommender};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct BookQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateViewRequest {
    #[serde(default)]
    pub search_text: String,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub id: Uuid,
    pub search_text: String,
    pub sort: Vec<SortDirective>,
    pub indicators: BTreeMap<SortColumn, SortIndicator>,
    pub rows: Vec<BookRow>,
}

impl ViewResponse {
    fn new(id: Uuid, list: &BookList, overview_path: &str) -> Self {
        Self {
            id,
            search_text: list.search_text().to_string(),
            sort: list.sort_config().directives().to_vec(),
            indicators: list.sort_config().indicators(),
            rows: list.rows(overview_path),
        }
    }
}

/// Reader history for a recommendation. Lists left out are taken from the
/// configured read / reading shelves.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    pub read: Option<Vec<BookId>>,
    pub reading: Option<Vec<BookId>>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the catalog, optionally narrowed by title
pub async fn get_books(
    State(state): State<AppState>,
    Query(params): Query<BookQuery>,
) -> Json<Vec<BookRecord>> {
    let inner = state.inner.read().await;
    let query = params.q.unwrap_or_default();
    let books: Vec<BookRecord> = filter_by_title(&inner.books, &query)
        .into_iter()
        .cloned()
        .collect();
    Json(books)
}

/// Add a book to the catalog
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<BookRecord>,
) -> AppResult<(StatusCode, Json<BookRecord>)> {
    if book.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Book title must not be empty".to_string()));
    }

    let mut inner = state.inner.write().await;
    if inner.books.iter().any(|existing| existing.id == book.id) {
        return Err(AppError::Conflict(format!("Book {} already exists", book.id)));
    }

    tracing::debug!(book_id = %book.id, title = %book.title, "Book added to catalog");
    inner.books.push(book.clone());

    Ok((StatusCode::CREATED, Json(book)))
}

/// Open a book list over the current catalog
pub async fn create_view(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CreateViewRequest>,
) -> (StatusCode, Json<ViewResponse>) {
    let mut inner = state.inner.write().await;
    let list = BookList::new(&inner.books, request.search_text);
    let id = Uuid::new_v4();

    tracing::info!(
        request_id = %request_id,
        view_id = %id,
        search_text = %list.search_text(),
        books = list.len(),
        "Book list opened"
    );

    let response = ViewResponse::new(id, &list, &state.settings.book_overview_path);
    let evicted = inner.open_view(id, list, state.settings.max_open_views);
    if !evicted.is_empty() {
        tracing::debug!(evicted = evicted.len(), "Oldest book lists closed");
    }

    (StatusCode::CREATED, Json(response))
}

/// Get a book list in its current sort order
pub async fn get_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ViewResponse>> {
    let inner = state.inner.read().await;
    let list = inner
        .views
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book list {}", id)))?;

    Ok(Json(ViewResponse::new(id, list, &state.settings.book_overview_path)))
}

/// Header click: advance a column through its sort cycle
pub async fn toggle_sort(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((id, column_key)): Path<(Uuid, String)>,
) -> AppResult<Json<ViewResponse>> {
    let column = SortColumn::from_key(&column_key);

    let mut inner = state.inner.write().await;
    let list = inner
        .views
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book list {}", id)))?;

    list.toggle_sort(column);

    tracing::info!(
        request_id = %request_id,
        view_id = %id,
        column_key = %column_key,
        column = %column,
        active = list.sort_config().directives().len(),
        "Sort toggled"
    );

    Ok(Json(ViewResponse::new(id, list, &state.settings.book_overview_path)))
}

/// Close a book list, discarding its sort state
pub async fn delete_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    inner
        .close_view(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book list {}", id)))?;

    tracing::info!(view_id = %id, "Book list closed");
    Ok(StatusCode::NO_CONTENT)
}

/// Recommend a couple of unseen books from the catalog
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> Json<Vec<BookRecord>> {
    let inner = state.inner.read().await;

    let from_shelves = ReadingHistory::from_shelves(
        &inner.books,
        &state.settings.read_shelf_name,
        &state.settings.reading_shelf_name,
    );
    let history = ReadingHistory {
        read: match request.read {
            Some(ids) => ids.into_iter().collect(),
            None => from_shelves.read,
        },
        reading: match request.reading {
            Some(ids) => ids.into_iter().collect(),
            None => from_shelves.reading,
        },
    };

    let picks: Vec<BookRecord> = Recommender::new(&inner.books, &history)
        .recommend()
        .into_iter()
        .cloned()
        .collect();

    tracing::info!(
        request_id = %request_id,
        catalog = inner.books.len(),
        read = history.read.len(),
        reading = history.reading.len(),
        recommended = picks.len(),
        "Recommendations computed"
    );

    Json(picks)
}
