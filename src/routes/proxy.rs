//! `/api/*` forwarding to the school backend.
//!
//! The browser only ever talks to this host; requests are replayed against
//! `BACKEND_URL` with the same method, path, query, and body, plus the few
//! headers the backend needs. The portal's own origin travels as
//! `X-Forwarded-Host`/`X-Forwarded-Proto` so links the backend builds from
//! the request (the password recovery email) point back at the portal.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HOST};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

/// Request headers copied to the upstream call.
pub const FORWARDED_HEADERS: [HeaderName; 4] = [CONTENT_TYPE, ACCEPT, AUTHORIZATION, COOKIE];

pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Scheme reported when no upstream proxy already set `X-Forwarded-Proto`.
const DEFAULT_FORWARDED_PROTO: &str = "http";

/// JSON body of a proxy failure; same shape as the backend's error bodies.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out")]
    Timeout,

    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl ProxyError {
    fn from_send(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        let body = ErrorBody { message: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

/// Join the backend base URL with the incoming path and query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// Keep only the headers listed in [`FORWARDED_HEADERS`] and describe the
/// portal's origin with `X-Forwarded-Host`/`X-Forwarded-Proto`.
///
/// Values set by a proxy in front of the portal win over the local `Host`.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }

    if let Some(host) = headers.get(X_FORWARDED_HOST).or_else(|| headers.get(HOST)) {
        out.insert(X_FORWARDED_HOST, host.clone());
    }
    let proto = headers
        .get(X_FORWARDED_PROTO)
        .cloned()
        .unwrap_or(HeaderValue::from_static(DEFAULT_FORWARDED_PROTO));
    out.insert(X_FORWARDED_PROTO, proto);
    out
}

/// Forward one request and relay the upstream status, content type, and body.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::from_send(&e))?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend error");
    }

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(content_type) => response.headers_mut().insert(CONTENT_TYPE, content_type),
        None => response.headers_mut().remove(CONTENT_TYPE),
    };
    Ok(response)
}
