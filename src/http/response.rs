//! Rendering of handler results
//!
//! Every outcome is answered with `200 OK`: rejections are reported as a
//! plain-text message in the body, successes as the statement in JSON.

use crate::types::BankError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

impl IntoResponse for BankError {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
