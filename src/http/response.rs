//! Responses emitted by filters.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Plain-text 404 sent when a filter rejects a request.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        "Not Found\n",
    )
        .into_response()
}
