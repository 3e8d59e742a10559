//! REST API client for the school backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A non-2xx response becomes
//! [`ApiError::Status`], carrying the backend's `message` field when the body
//! has one, so pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{NotificationPayload, RecipientLookup, ResetRequest};

pub const RESET_PASSWORD_PATH: &str = "/api/reset_password";
pub const FORGOT_PASSWORD_PATH: &str = "/api/forgot-password";
pub const NOTIFY_ALL_PATH: &str = "/api/notifications/send-to-all";
pub const NOTIFY_STUDENT_PATH: &str = "/api/notifications/send-to-student";
pub const NOTIFY_PARENT_PATH: &str = "/api/notifications/send-to-parent";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message supplied by the backend, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

/// External services the portal forms call.
///
/// The browser uses [`HttpApi`]; tests substitute a recording fake.
#[async_trait(?Send)]
pub trait PortalApi {
    /// `resetPassword(token, newPassword)`.
    async fn reset_password(&self, request: &ResetRequest) -> Result<(), ApiError>;

    /// `verifyChildByDni(dni)`; `Ok(None)` when the backend has no match.
    async fn verify_child_by_dni(&self, dni: &str) -> Result<Option<RecipientLookup>, ApiError>;

    async fn send_notification_to_all(&self, payload: &NotificationPayload) -> Result<(), ApiError>;

    async fn send_notification_to_student(&self, payload: &NotificationPayload) -> Result<(), ApiError>;

    async fn send_notification_to_parent(&self, payload: &NotificationPayload) -> Result<(), ApiError>;

    /// Ask the backend to mail a recovery link to `email`.
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;
}

/// Same-origin HTTP implementation of [`PortalApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn verify_child_endpoint(dni: &str) -> String {
    format!("/api/admin/verify-child/{}", urlencoding::encode(dni))
}

/// Build the error for a failed response from its status and raw body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body).ok().and_then(|b| b.message);
    ApiError::Status { status, message }
}

/// Decode a lookup body; an empty body or JSON `null` means "no match".
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_lookup_body(body: &str) -> Result<Option<RecipientLookup>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<RecipientLookup>>(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_success(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_notification(path: &str, payload: &NotificationPayload) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(path)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_success(resp).await.map(|_| ())
}

#[async_trait(?Send)]
impl PortalApi for HttpApi {
    async fn reset_password(&self, request: &ResetRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(RESET_PASSWORD_PATH)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(request.form_body())
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_success(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn verify_child_by_dni(&self, dni: &str) -> Result<Option<RecipientLookup>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = verify_child_endpoint(dni);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = expect_success(resp).await?;
            let body = resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
            parse_lookup_body(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dni;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_notification_to_all(&self, payload: &NotificationPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_notification(NOTIFY_ALL_PATH, payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_notification_to_student(&self, payload: &NotificationPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_notification(NOTIFY_STUDENT_PATH, payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_notification_to_parent(&self, payload: &NotificationPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_notification(NOTIFY_PARENT_PATH, payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(FORGOT_PASSWORD_PATH)
                .query([("email", email)])
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            expect_success(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(ApiError::Unavailable)
        }
    }
}
