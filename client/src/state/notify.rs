//! Notification composer state and dispatch routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The composer collects year, session, audience, optional DNI, and message.
//! `NotificationForm::begin_submit` validates fail-fast and yields a
//! [`DispatchPlan`]; [`dispatch`] routes the plan to exactly one of the three
//! backend endpoints. A plan cannot be built from invalid input, so a rejected
//! form never reaches the network.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use super::submit::SubmitPhase;
use super::toast::Notice;
use crate::net::api::{ApiError, PortalApi};
use crate::net::types::{NotificationPayload, RecipientLookup, TargetGroup};

pub const YEAR_OPTIONS: [&str; 5] = ["1º", "2º", "3º", "4º", "5º"];
pub const SESSION_OPTIONS: [&str; 2] = ["Mañana", "Tarde"];

/// Length a DNI must have before a lookup is attempted.
pub const DNI_LEN: usize = 8;

pub const DISPATCH_SUCCESS_TITLE: &str = "Notificación Enviada";
pub const DISPATCH_SUCCESS_MESSAGE: &str = "La notificación se ha enviado correctamente.";
pub const DISPATCH_FAILURE_MESSAGE: &str = "Hubo un problema al enviar la notificación.";
pub const LOOKUP_FAILURE_MESSAGE: &str = "No se pudo obtener la información del estudiante.";

/// Pre-submit validation failures, in check order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Por favor, selecciona un año.")]
    MissingYear,

    #[error("Por favor, selecciona un turno.")]
    MissingSession,

    #[error("Por favor, elige a quién enviar la notificación.")]
    MissingTarget,

    #[error("Por favor, escribe un mensaje.")]
    EmptyMessage,

    #[error("DNI es requerido para enviar a un estudiante.")]
    MissingStudentDni,

    #[error("DNI es requerido para enviar a un padre.")]
    MissingParentDni,

    #[error("Ya se está enviando una notificación.")]
    Busy,
}

/// A validated notification ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchPlan {
    payload: NotificationPayload,
}

impl DispatchPlan {
    pub fn target(&self) -> TargetGroup {
        self.payload.target_group
    }

    pub fn payload(&self) -> &NotificationPayload {
        &self.payload
    }
}

/// Send `plan` to the endpoint matching its target group.
///
/// # Errors
///
/// Propagates the backend failure unchanged.
pub async fn dispatch<A: PortalApi + ?Sized>(api: &A, plan: &DispatchPlan) -> Result<(), ApiError> {
    let payload = plan.payload();
    log::debug!(
        "dispatching notification target={:?} year={} session={} has_dni={}",
        payload.target_group,
        payload.year,
        payload.session,
        payload.dni.is_some()
    );
    match plan.target() {
        TargetGroup::Course => api.send_notification_to_all(payload).await,
        TargetGroup::Student => api.send_notification_to_student(payload).await,
        TargetGroup::Parent => api.send_notification_to_parent(payload).await,
    }
}

/// Editable composer fields. `send_to` holds the raw selector value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationForm {
    pub year: String,
    pub session: String,
    pub send_to: String,
    pub dni: String,
    /// Name resolved by the last DNI lookup; display only.
    pub full_name: String,
    pub message: String,
    pub phase: SubmitPhase,
}

impl NotificationForm {
    pub fn target(&self) -> Option<TargetGroup> {
        TargetGroup::from_selector(&self.send_to)
    }

    /// Whether the DNI search block is shown.
    pub fn needs_dni(&self) -> bool {
        self.target().is_some_and(TargetGroup::requires_dni)
    }

    /// Change the audience. Picking an individual audience starts a fresh search.
    pub fn select_target(&mut self, value: String) {
        if TargetGroup::from_selector(&value).is_some_and(TargetGroup::requires_dni) {
            self.dni.clear();
            self.full_name.clear();
        }
        self.send_to = value;
    }

    /// Whether the search button is enabled.
    pub fn can_search(&self) -> bool {
        !self.dni.is_empty()
    }

    /// DNI to look up, or `None` (clearing the shown name) when its length is wrong.
    pub fn lookup_key(&mut self) -> Option<String> {
        if self.dni.chars().count() == DNI_LEN {
            Some(self.dni.clone())
        } else {
            self.full_name.clear();
            None
        }
    }

    /// Apply a lookup result; returns a notice only on failure.
    pub fn apply_lookup(&mut self, result: Result<Option<RecipientLookup>, ApiError>) -> Option<Notice> {
        match result {
            Ok(Some(found)) => {
                self.full_name = found.display_name();
                None
            }
            Ok(None) => {
                self.full_name.clear();
                None
            }
            Err(e) => {
                log::error!("DNI lookup failed: {e}");
                self.full_name.clear();
                Some(Notice::error(LOOKUP_FAILURE_MESSAGE))
            }
        }
    }

    /// Check the fields in order and build the plan.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid field.
    pub fn validate(&self) -> Result<DispatchPlan, DispatchError> {
        if self.year.is_empty() {
            return Err(DispatchError::MissingYear);
        }
        if self.session.is_empty() {
            return Err(DispatchError::MissingSession);
        }
        let target = self.target().ok_or(DispatchError::MissingTarget)?;
        if self.message.is_empty() {
            return Err(DispatchError::EmptyMessage);
        }
        let dni = match target {
            TargetGroup::Course => None,
            TargetGroup::Student if self.dni.is_empty() => return Err(DispatchError::MissingStudentDni),
            TargetGroup::Parent if self.dni.is_empty() => return Err(DispatchError::MissingParentDni),
            TargetGroup::Student | TargetGroup::Parent => Some(self.dni.clone()),
        };
        Ok(DispatchPlan {
            payload: NotificationPayload {
                year: self.year.clone(),
                session: self.session.clone(),
                dni,
                target_group: target,
                message: self.message.clone(),
            },
        })
    }

    /// Validate and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Busy`] while a send is pending, otherwise the
    /// first validation failure.
    pub fn begin_submit(&mut self) -> Result<DispatchPlan, DispatchError> {
        if self.phase.is_busy() {
            return Err(DispatchError::Busy);
        }
        let plan = self.validate()?;
        self.phase = SubmitPhase::Submitting;
        Ok(plan)
    }

    /// Record the dispatch outcome. Success clears every field; failure keeps them.
    pub fn complete(&mut self, result: Result<(), ApiError>) -> Notice {
        match result {
            Ok(()) => {
                *self = Self { phase: SubmitPhase::Succeeded, ..Self::default() };
                Notice::success(DISPATCH_SUCCESS_TITLE, DISPATCH_SUCCESS_MESSAGE)
            }
            Err(e) => {
                log::warn!("notification dispatch failed: {e}");
                self.phase = SubmitPhase::Failed;
                Notice::error(e.server_message().unwrap_or(DISPATCH_FAILURE_MESSAGE))
            }
        }
    }
}
