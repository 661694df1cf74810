//! Shared response envelope types for API handlers.
//!
//! Every response body is `{ "success": bool, "data"?: T, "error"?: string }`.
//! Success bodies are built with [`ApiResponse::ok`]; failure bodies come from
//! [`AppError`](crate::error::AppError)'s `IntoResponse` impl.

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dineflow_core::paging::Page;
use serde::Serialize;

/// Response header carrying the cursor for the next page of a list.
pub const NEXT_CURSOR_HEADER: HeaderName = HeaderName::from_static("x-next-cursor");

/// Standard success envelope.
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(settings)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A page of records rendered as a plain JSON array in `data`. The cursor
/// for the following page travels in the `x-next-cursor` header.
#[derive(Debug)]
pub struct Listed<T>(pub Page<T>);

impl<T: Serialize> IntoResponse for Listed<T> {
    fn into_response(self) -> Response {
        let Page { items, next } = self.0;
        let mut response = Json(ApiResponse::ok(items)).into_response();
        if let Some(value) = next.and_then(|n| HeaderValue::from_str(&n).ok()) {
            response.headers_mut().insert(NEXT_CURSOR_HEADER, value);
        }
        response
    }
}
