// ./src/response.rs

use axum::{
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

// ════════════════════════════════════════════════════════════
// 1. Shared Modifiers
// ════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct BaseResponse {
    pub headers: HeaderMap,
}

impl BaseResponse {
    pub fn apply_to_response(&self, response: &mut Response) {
        for (name, value) in &self.headers {
            response.headers_mut().insert(name.clone(), value.clone());
        }
    }
}

pub trait ResponseExt: Sized {
    fn base_mut(&mut self) -> &mut BaseResponse;

    fn with_header(mut self, key: &'static str, value: &'static str) -> Self {
        if let Ok(val) = HeaderValue::from_str(value) {
            self.base_mut()
                .headers
                .insert(HeaderName::from_static(key), val);
        }
        self
    }

    /// Marks the response as never reusable. Every click must reach the server.
    fn no_cache(self) -> Self {
        self.with_header("cache-control", "no-store")
    }
}

// ════════════════════════════════════════════════════════════
// 2. Response Wrappers
// ════════════════════════════════════════════════════════════

// --- HTML ---
pub struct HtmlResponse {
    pub data: String,
    pub base: BaseResponse,
}

impl IntoResponse for HtmlResponse {
    fn into_response(self) -> Response {
        let mut response = axum::response::Html(self.data).into_response();
        self.base.apply_to_response(&mut response);
        response
    }
}

// --- JSON ---
pub struct JsonResponse<T> {
    pub data: T,
    pub base: BaseResponse,
}

impl<T: serde::Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        // Never unwrap serialization. Return 500 if it fails.
        let payload = match serde_json::to_value(&self.data) {
            Ok(val) => val,
            Err(err) => {
                tracing::error!(error = %err, "response serialization failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let mut response = Json(payload).into_response();
        self.base.apply_to_response(&mut response);
        response
    }
}

// --- FILE ---
pub struct FileResponse {
    pub data: Vec<u8>,
    pub content_type: &'static str,
    pub base: BaseResponse,
}

impl IntoResponse for FileResponse {
    fn into_response(self) -> Response {
        let mut response = (
            [(header::CONTENT_TYPE, HeaderValue::from_static(self.content_type))],
            self.data,
        )
            .into_response();
        self.base.apply_to_response(&mut response);
        response
    }
}

// ════════════════════════════════════════════════════════════
// 3. Constructors & Trait Impls
// ════════════════════════════════════════════════════════════

pub fn html(data: impl Into<String>) -> HtmlResponse {
    HtmlResponse {
        data: data.into(),
        base: BaseResponse::default(),
    }
}

pub fn json<T>(data: T) -> JsonResponse<T> {
    JsonResponse {
        data,
        base: BaseResponse::default(),
    }
}

pub fn file(data: Vec<u8>, content_type: &'static str) -> FileResponse {
    FileResponse {
        data,
        content_type,
        base: BaseResponse::default(),
    }
}

impl ResponseExt for HtmlResponse {
    fn base_mut(&mut self) -> &mut BaseResponse {
        &mut self.base
    }
}
impl<T> ResponseExt for JsonResponse<T> {
    fn base_mut(&mut self) -> &mut BaseResponse {
        &mut self.base
    }
}
impl ResponseExt for FileResponse {
    fn base_mut(&mut self) -> &mut BaseResponse {
        &mut self.base
    }
}
