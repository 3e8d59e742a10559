//! Recording [`PortalApi`] double for flow tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::api::{ApiError, PortalApi};
use super::types::{NotificationPayload, RecipientLookup, ResetRequest};

/// One backend call as seen by the fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ResetPassword(ResetRequest),
    VerifyChild(String),
    NotifyAll(NotificationPayload),
    NotifyStudent(NotificationPayload),
    NotifyParent(NotificationPayload),
    ForgotPassword(String),
}

/// Records every call and answers with a canned outcome.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub failure: Option<ApiError>,
    pub lookup: Option<RecipientLookup>,
}

impl FakeApi {
    pub fn failing(err: ApiError) -> Self {
        Self { failure: Some(err), ..Self::default() }
    }

    pub fn with_lookup(lookup: RecipientLookup) -> Self {
        Self { lookup: Some(lookup), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl PortalApi for FakeApi {
    async fn reset_password(&self, request: &ResetRequest) -> Result<(), ApiError> {
        self.record(Call::ResetPassword(request.clone()))
    }

    async fn verify_child_by_dni(&self, dni: &str) -> Result<Option<RecipientLookup>, ApiError> {
        self.record(Call::VerifyChild(dni.to_owned()))?;
        Ok(self.lookup.clone())
    }

    async fn send_notification_to_all(&self, payload: &NotificationPayload) -> Result<(), ApiError> {
        self.record(Call::NotifyAll(payload.clone()))
    }

    async fn send_notification_to_student(&self, payload: &NotificationPayload) -> Result<(), ApiError> {
        self.record(Call::NotifyStudent(payload.clone()))
    }

    async fn send_notification_to_parent(&self, payload: &NotificationPayload) -> Result<(), ApiError> {
        self.record(Call::NotifyParent(payload.clone()))
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.record(Call::ForgotPassword(email.to_owned()))
    }
}
