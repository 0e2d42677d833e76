//! Handlers for the landing page collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use veranda_core::error::CoreError;
use veranda_core::page::LandingPage;
use veranda_core::preview;
use veranda_store::SaveOutcome;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ------ Landing page endpoints ------

/// GET /api/v1/pages
///
/// List all landing pages in collection order (newest first).
pub async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;

    Ok(Json(DataResponse {
        data: store.list().to_vec(),
    }))
}

/// POST /api/v1/pages
///
/// Save a complete page aggregate. An empty or unresolved id creates a
/// new page with a fresh sequential id (201); a matching id replaces the
/// stored page in place (200).
pub async fn save_page(
    State(state): State<AppState>,
    Json(input): Json<LandingPage>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.write().await;
    let (outcome, page) = store.save(input);

    tracing::info!(
        page_id = %page.id,
        title = %page.title,
        ?outcome,
        "Landing page saved",
    );

    let status = match outcome {
        SaveOutcome::Created => StatusCode::CREATED,
        SaveOutcome::Replaced => StatusCode::OK,
    };

    Ok((status, Json(DataResponse { data: page })))
}

/// GET /api/v1/pages/{id}
///
/// Fetch a single landing page by id.
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    let page = store
        .get(&page_id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LandingPage",
            id: page_id,
        }))?;

    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/pages/{id}
///
/// Remove a landing page from the collection.
pub async fn delete_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut store = state.store.write().await;
    let deleted = store.delete(&page_id);

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "LandingPage",
            id: page_id,
        }));
    }

    tracing::info!(page_id = %page_id, "Landing page deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/pages/{id}/preview
///
/// Build the read-only preview projection for a page.
pub async fn preview_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.read().await;
    let page = store
        .get(&page_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LandingPage",
            id: page_id,
        }))?;

    let preview = preview::page_preview(page);
    tracing::info!(page_id = %page.id, "{}", preview.message);

    Ok(Json(DataResponse { data: preview }))
}
