//! Password reset form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reset page owns one `ResetForm` signal. Submitting walks
//! `Idle -> Submitting -> {Succeeded, Failed}`; a `ResetRequest` only exists
//! once the confirmation matches and the password passes the strength policy,
//! so nothing reaches the network before validation.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use super::submit::SubmitPhase;
use super::toast::Notice;
use crate::net::api::{ApiError, PortalApi};
use crate::net::types::ResetRequest;
use crate::util::password::{PASSWORD_POLICY_MESSAGE, is_strong_password};

pub const RESET_SUCCESS_TITLE: &str = "Éxito";
pub const RESET_SUCCESS_MESSAGE: &str =
    "La contraseña se ha restablecido con éxito. Puedes iniciar sesión con tu nueva contraseña.";
pub const RESET_FAILURE_MESSAGE: &str = "No se pudo restablecer la contraseña.";

/// Reasons a reset never leaves the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResetError {
    #[error("Token no proporcionado.")]
    MissingToken,

    #[error("Las contraseñas no coinciden.")]
    Mismatch,

    #[error("{}", PASSWORD_POLICY_MESSAGE)]
    WeakPassword,

    #[error("Ya se está restableciendo la contraseña.")]
    Busy,
}

/// Extract the reset token from the `token` query parameter.
///
/// # Errors
///
/// Returns [`ResetError::MissingToken`] when the parameter is absent or empty.
pub fn token_from_query(raw: Option<String>) -> Result<String, ResetError> {
    raw.filter(|t| !t.is_empty()).ok_or(ResetError::MissingToken)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
    /// Inline policy message; only changed by a validation pass.
    pub password_error: Option<String>,
    pub phase: SubmitPhase,
}

impl ResetForm {
    pub fn new(token: String) -> Self {
        Self { token, ..Self::default() }
    }

    /// Validate the fields and move to `Submitting`.
    ///
    /// The mismatch check runs first and leaves `password_error` untouched;
    /// the strength check sets or clears it.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; the phase is unchanged on error.
    pub fn begin_submit(&mut self) -> Result<ResetRequest, ResetError> {
        if self.phase.is_busy() {
            return Err(ResetError::Busy);
        }
        if self.token.is_empty() {
            return Err(ResetError::MissingToken);
        }
        if self.new_password != self.confirm_password {
            return Err(ResetError::Mismatch);
        }
        if !is_strong_password(&self.new_password) {
            self.password_error = Some(PASSWORD_POLICY_MESSAGE.to_owned());
            return Err(ResetError::WeakPassword);
        }
        self.password_error = None;
        self.phase = SubmitPhase::Submitting;
        Ok(ResetRequest { token: self.token.clone(), new_password: self.new_password.clone() })
    }

    /// Record the outcome of the reset call and return the notice to show.
    pub fn complete(&mut self, result: Result<(), ApiError>) -> Notice {
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Succeeded;
                Notice::success(RESET_SUCCESS_TITLE, RESET_SUCCESS_MESSAGE)
            }
            Err(e) => {
                log::warn!("password reset failed: {e}");
                self.phase = SubmitPhase::Failed;
                Notice::error(RESET_FAILURE_MESSAGE)
            }
        }
    }
}

/// Submit a validated reset to the backend.
///
/// # Errors
///
/// Propagates the backend failure unchanged; there is no retry.
pub async fn send<A: PortalApi + ?Sized>(api: &A, request: &ResetRequest) -> Result<(), ApiError> {
    log::debug!("submitting password reset (token length {})", request.token.len());
    api.reset_password(request).await
}
