//! Forgot-password request form state.

#[cfg(test)]
#[path = "forgot_test.rs"]
mod forgot_test;

use super::submit::SubmitPhase;
use super::toast::Notice;
use crate::net::api::ApiError;

pub const FORGOT_SUCCESS_TITLE: &str = "Correo enviado";
pub const FORGOT_SUCCESS_MESSAGE: &str = "Te enviamos un enlace para restablecer tu contraseña.";
pub const FORGOT_FAILURE_MESSAGE: &str = "No se pudo enviar el correo de recuperación.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ForgotError {
    #[error("Ingresa tu correo electrónico.")]
    EmptyEmail,

    #[error("Ya se está enviando el correo.")]
    Busy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotForm {
    pub email: String,
    pub error: Option<String>,
    pub phase: SubmitPhase,
}

impl ForgotForm {
    /// Trim the email and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgotError::EmptyEmail`] (also stored as the inline error)
    /// for a blank address, or [`ForgotError::Busy`] while a request is pending.
    pub fn begin_submit(&mut self) -> Result<String, ForgotError> {
        if self.phase.is_busy() {
            return Err(ForgotError::Busy);
        }
        let email = self.email.trim().to_owned();
        if email.is_empty() {
            self.error = Some(ForgotError::EmptyEmail.to_string());
            return Err(ForgotError::EmptyEmail);
        }
        self.error = None;
        self.phase = SubmitPhase::Submitting;
        Ok(email)
    }

    pub fn complete(&mut self, result: Result<(), ApiError>) -> Notice {
        match result {
            Ok(()) => {
                *self = Self { phase: SubmitPhase::Succeeded, ..Self::default() };
                Notice::success(FORGOT_SUCCESS_TITLE, FORGOT_SUCCESS_MESSAGE)
            }
            Err(e) => {
                log::warn!("password recovery request failed: {e}");
                self.phase = SubmitPhase::Failed;
                Notice::error(e.server_message().unwrap_or(FORGOT_FAILURE_MESSAGE))
            }
        }
    }
}
