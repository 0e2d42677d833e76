//! Route definitions for the landing page editor.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::editor;
use crate::state::AppState;

/// Editor routes, mounted at `/editor`.
///
/// ```text
/// GET    /palette                                  -> get_palette
/// POST   /sessions                                 -> begin_session
/// GET    /sessions/{id}                            -> get_session
/// PATCH  /sessions/{id}                            -> update_session
/// DELETE /sessions/{id}                            -> discard_session
/// POST   /sessions/{id}/drop                       -> drop_block
/// PUT    /sessions/{id}/selection                  -> select_block
/// PUT    /sessions/{id}/blocks                     -> update_block
/// PATCH  /sessions/{id}/blocks/{block_id}          -> edit_block
/// DELETE /sessions/{id}/blocks/{block_id}          -> remove_block
/// PUT    /sessions/{id}/blocks/{block_id}/position -> move_block
/// POST   /sessions/{id}/save                       -> save_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/palette", get(editor::get_palette))
        .route("/sessions", post(editor::begin_session))
        .route(
            "/sessions/{id}",
            get(editor::get_session)
                .patch(editor::update_session)
                .delete(editor::discard_session),
        )
        .route("/sessions/{id}/drop", post(editor::drop_block))
        .route("/sessions/{id}/selection", put(editor::select_block))
        .route("/sessions/{id}/blocks", put(editor::update_block))
        .route(
            "/sessions/{id}/blocks/{block_id}",
            patch(editor::edit_block).delete(editor::remove_block),
        )
        .route(
            "/sessions/{id}/blocks/{block_id}/position",
            put(editor::move_block),
        )
        .route("/sessions/{id}/save", post(editor::save_session))
}
