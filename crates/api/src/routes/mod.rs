pub mod editor;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages                                           list, save
/// /pages/{id}                                      get, delete
/// /pages/{id}/preview                              preview projection
///
/// /editor/palette                                  component palette
/// /editor/sessions                                 open a session
/// /editor/sessions/{id}                            view, update, discard
/// /editor/sessions/{id}/drop                       palette drop
/// /editor/sessions/{id}/selection                  select a block
/// /editor/sessions/{id}/blocks                     replace a block
/// /editor/sessions/{id}/blocks/{block_id}          edit, remove a block
/// /editor/sessions/{id}/blocks/{block_id}/position move a block
/// /editor/sessions/{id}/save                       finalize into the collection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Landing page collection.
        .nest("/pages", pages::router())
        // Editor palette and sessions.
        .nest("/editor", editor::router())
}
