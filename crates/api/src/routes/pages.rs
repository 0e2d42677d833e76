//! Route definitions for the landing page collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Landing page routes, mounted at `/pages`.
///
/// ```text
/// GET    /              -> list_pages
/// POST   /              -> save_page
/// GET    /{id}          -> get_page
/// DELETE /{id}          -> delete_page
/// GET    /{id}/preview  -> preview_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::save_page))
        .route("/{id}", get(pages::get_page).delete(pages::delete_page))
        .route("/{id}/preview", get(pages::preview_page))
}
