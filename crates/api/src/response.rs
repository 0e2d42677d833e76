//! Shared response envelope for API handlers.
//!
//! Every success payload is wrapped in `{ "data": ... }`. Handlers use
//! [`DataResponse`] rather than ad-hoc `serde_json::json!` maps so the
//! envelope stays consistent and type-checked.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
