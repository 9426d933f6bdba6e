use crate::common::cookies;
use crate::common::flash::{self, FLASH_COOKIE, Flash, RenderedFlash};
use axum::Json;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    pub flash: Option<RenderedFlash>,
}

/// Shows the pending flash message, if any, and consumes it.
pub async fn index(headers: HeaderMap) -> Response {
    let flash = Flash::from_headers(&headers).map(|flash| flash.render_for(&headers));
    let response = Json(IndexResponse { flash });
    match cookies::find(&headers, FLASH_COOKIE) {
        Some(_) => (flash::clear_cookie(), response).into_response(),
        None => response.into_response(),
    }
}
