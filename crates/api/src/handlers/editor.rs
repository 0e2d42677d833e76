//! Handlers for the landing page editor: component palette, session
//! lifecycle, canvas operations, and save.
//!
//! Block-addressed operations succeed without effect when the block id
//! does not resolve, matching how the canvas ignores stale updates. Only
//! missing sessions and pages surface as 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use veranda_core::block::{self, Block};
use veranda_core::edit::BlockEdit;
use veranda_core::error::CoreError;
use veranda_core::page::PageStatus;
use veranda_core::session::EditorSession;
use veranda_core::types::{BlockId, PageId};
use veranda_store::SaveOutcome;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// POST /editor/sessions request body.
#[derive(Debug, Deserialize)]
pub struct BeginSessionRequest {
    /// Id of the page to edit; omit (or null) to start a new draft.
    #[serde(default)]
    pub page_id: Option<PageId>,
}

/// PATCH /editor/sessions/{id} request body.
#[derive(Debug, Deserialize)]
pub struct UpdateSessionRequest {
    pub title: Option<String>,
    pub status: Option<PageStatus>,
}

/// POST /editor/sessions/{id}/drop request body.
#[derive(Debug, Deserialize)]
pub struct DropRequest {
    /// Raw drag payload naming the block kind to create.
    pub block_type: String,
}

/// PUT /editor/sessions/{id}/selection request body.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub block_id: Option<BlockId>,
}

/// PUT /editor/sessions/{id}/blocks/{block_id}/position request body.
#[derive(Debug, Deserialize)]
pub struct MoveBlockRequest {
    pub index: usize,
}

/// Snapshot of an editor session, returned by every session endpoint.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub page_id: Option<PageId>,
    pub title: String,
    pub status: PageStatus,
    pub created_at: Option<NaiveDate>,
    pub content: Vec<Block>,
    pub selected_block_id: Option<BlockId>,
    /// The selected block, when the selection resolves to one.
    pub selected_block: Option<Block>,
}

impl SessionView {
    fn from_session(session_id: Uuid, session: &EditorSession) -> Self {
        Self {
            session_id,
            page_id: session.page_id.clone(),
            title: session.title.clone(),
            status: session.status,
            created_at: session.created_at,
            content: session.content.clone(),
            selected_block_id: session.selected_block_id.clone(),
            selected_block: session.selected_block().cloned(),
        }
    }
}

fn session_not_found(session_id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "EditorSession",
        id: session_id.to_string(),
    })
}

/// Snapshot a session by id, or 404.
async fn session_view(state: &AppState, session_id: Uuid) -> AppResult<SessionView> {
    state
        .sessions
        .with_session(session_id, |session| {
            SessionView::from_session(session_id, session)
        })
        .await
        .ok_or_else(|| session_not_found(session_id))
}

// ------ Palette endpoint ------

/// GET /api/v1/editor/palette
///
/// The fixed component palette: one draggable entry per block kind.
pub async fn get_palette() -> impl IntoResponse {
    Json(DataResponse {
        data: block::palette(),
    })
}

// ------ Session lifecycle endpoints ------

/// POST /api/v1/editor/sessions
///
/// Open an editor session: a working copy of an existing page when
/// `page_id` is given, otherwise a fresh draft.
pub async fn begin_session(
    State(state): State<AppState>,
    Json(input): Json<BeginSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let session = match &input.page_id {
        Some(page_id) => {
            let store = state.store.read().await;
            let page = store
                .get(page_id)
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "LandingPage",
                    id: page_id.clone(),
                }))?;
            EditorSession::edit(page)
        }
        None => EditorSession::new_page(),
    };

    let session_id = state.sessions.create(session).await;

    tracing::info!(%session_id, page_id = ?input.page_id, "Editor session opened");

    let view = session_view(&state, session_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// GET /api/v1/editor/sessions/{id}
///
/// The current working state of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let view = session_view(&state, session_id).await?;

    Ok(Json(DataResponse { data: view }))
}

/// PATCH /api/v1/editor/sessions/{id}
///
/// Update the working page title and/or status.
pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<UpdateSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .sessions
        .with_session(session_id, |session| {
            if let Some(title) = input.title {
                session.set_title(title);
            }
            if let Some(status) = input.status {
                session.set_status(status);
            }
            SessionView::from_session(session_id, session)
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/editor/sessions/{id}
///
/// Close the session without saving; the working draft is discarded and
/// the page collection is untouched.
pub async fn discard_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state
        .sessions
        .remove(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    tracing::info!(%session_id, "Editor session discarded");

    Ok(StatusCode::NO_CONTENT)
}

// ------ Canvas endpoints ------

/// POST /api/v1/editor/sessions/{id}/drop
///
/// Handle a palette drop. A recognised kind payload appends a default
/// block and selects it; anything else leaves the session untouched.
pub async fn drop_block(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<DropRequest>,
) -> AppResult<impl IntoResponse> {
    let (added, view) = state
        .sessions
        .with_session(session_id, |session| {
            let added = session.accept_drop(&input.block_type);
            (added, SessionView::from_session(session_id, session))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    match added {
        Some(block_id) => {
            tracing::info!(
                %session_id,
                %block_id,
                block_type = %input.block_type,
                "Block added to canvas",
            );
        }
        None => {
            tracing::debug!(
                %session_id,
                payload = %input.block_type,
                "Ignoring unrecognised drop payload",
            );
        }
    }

    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/editor/sessions/{id}/selection
///
/// Set or clear the selected block. A stale id is kept as-is and simply
/// resolves to no block.
pub async fn select_block(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<SelectionRequest>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .sessions
        .with_session(session_id, |session| {
            session.select(input.block_id);
            SessionView::from_session(session_id, session)
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/editor/sessions/{id}/blocks
///
/// Replace a block wholesale, matched by the id embedded in the payload.
/// Unknown block ids leave the canvas unchanged; changing a block's kind
/// is rejected.
pub async fn update_block(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<Block>,
) -> AppResult<impl IntoResponse> {
    let block_id = input.id.clone();

    let result = state
        .sessions
        .with_session(session_id, |session| {
            session
                .apply_update(input)
                .map(|()| SessionView::from_session(session_id, session))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    let view = result?;

    tracing::debug!(%session_id, %block_id, "Block replaced");

    Ok(Json(DataResponse { data: view }))
}

/// PATCH /api/v1/editor/sessions/{id}/blocks/{block_id}
///
/// Apply a single property edit to a block. Unknown block ids leave the
/// canvas unchanged; an edit addressed to the wrong kind is rejected.
pub async fn edit_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, String)>,
    Json(edit): Json<BlockEdit>,
) -> AppResult<impl IntoResponse> {
    let result = state
        .sessions
        .with_session(session_id, |session| {
            session
                .edit_block(&block_id, &edit)
                .map(|()| SessionView::from_session(session_id, session))
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;
    let view = result?;

    tracing::debug!(%session_id, %block_id, "Block edit applied");

    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/editor/sessions/{id}/blocks/{block_id}
///
/// Remove a block from the canvas, clearing the selection if it pointed
/// at the removed block. Unknown block ids leave the canvas unchanged.
pub async fn remove_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, String)>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .sessions
        .with_session(session_id, |session| {
            session.remove_block(&block_id);
            SessionView::from_session(session_id, session)
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    tracing::info!(%session_id, %block_id, "Block removed from canvas");

    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/editor/sessions/{id}/blocks/{block_id}/position
///
/// Move a block to a new position in the sequence. Out-of-range targets
/// clamp to the end; unknown block ids leave the canvas unchanged.
pub async fn move_block(
    State(state): State<AppState>,
    Path((session_id, block_id)): Path<(Uuid, String)>,
    Json(input): Json<MoveBlockRequest>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .sessions
        .with_session(session_id, |session| {
            session.move_block(&block_id, input.index);
            SessionView::from_session(session_id, session)
        })
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    tracing::info!(%session_id, %block_id, index = input.index, "Block moved");

    Ok(Json(DataResponse { data: view }))
}

// ------ Save endpoint ------

/// POST /api/v1/editor/sessions/{id}/save
///
/// Finalize the working draft into the page collection and close the
/// session. Returns the stored page, including a freshly assigned id for
/// first-time saves (201); replacing an existing page returns 200.
pub async fn save_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let session = state
        .sessions
        .remove(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    let mut store = state.store.write().await;
    let (outcome, page) = store.save(session.finalize());

    tracing::info!(
        %session_id,
        page_id = %page.id,
        title = %page.title,
        ?outcome,
        "Editor session saved",
    );

    let status = match outcome {
        SaveOutcome::Created => StatusCode::CREATED,
        SaveOutcome::Replaced => StatusCode::OK,
    };

    Ok((status, Json(DataResponse { data: page })))
}
