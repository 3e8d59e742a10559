use super::*;
use crate::net::api_fake::{Call, FakeApi};
use crate::state::toast::NoticeKind;
use futures::executor::block_on;

const STRONG: &str = "Abcdefghijk12";

fn filled(new_password: &str, confirm_password: &str) -> ResetForm {
    ResetForm {
        new_password: new_password.to_owned(),
        confirm_password: confirm_password.to_owned(),
        ..ResetForm::new("tok-123".to_owned())
    }
}

/// Mirrors the page's submit handler: validate, then call the backend.
fn submit(form: &mut ResetForm, api: &FakeApi) -> Result<Notice, ResetError> {
    let request = form.begin_submit()?;
    let result = block_on(send(api, &request));
    Ok(form.complete(result))
}

// =============================================================
// Token acquisition
// =============================================================

#[test]
fn token_from_query_accepts_present_token() {
    assert_eq!(token_from_query(Some("abc".to_owned())), Ok("abc".to_owned()));
}

#[test]
fn token_from_query_rejects_missing_or_empty() {
    assert_eq!(token_from_query(None), Err(ResetError::MissingToken));
    assert_eq!(token_from_query(Some(String::new())), Err(ResetError::MissingToken));
    assert_eq!(ResetError::MissingToken.to_string(), "Token no proporcionado.");
}

// =============================================================
// Validation order
// =============================================================

#[test]
fn mismatch_never_calls_reset_service() {
    let api = FakeApi::default();
    let mut form = filled(STRONG, "Abcdefghijk13");
    assert_eq!(submit(&mut form, &api), Err(ResetError::Mismatch));
    assert!(api.calls().is_empty());
    assert_eq!(form.phase, SubmitPhase::Idle);
}

#[test]
fn mismatch_with_weak_password_reports_mismatch_only() {
    let mut form = filled("abc", "abd");
    assert_eq!(form.begin_submit(), Err(ResetError::Mismatch));
    assert_eq!(form.password_error, None);
    assert_eq!(ResetError::Mismatch.to_string(), "Las contraseñas no coinciden.");
}

#[test]
fn weak_password_sets_inline_error_without_calling() {
    let api = FakeApi::default();
    let mut form = filled("abcdefghijklm", "abcdefghijklm");
    assert_eq!(submit(&mut form, &api), Err(ResetError::WeakPassword));
    assert_eq!(form.password_error.as_deref(), Some(PASSWORD_POLICY_MESSAGE));
    assert!(api.calls().is_empty());
}

#[test]
fn passing_validation_clears_inline_error() {
    let mut form = filled(STRONG, STRONG);
    form.password_error = Some(PASSWORD_POLICY_MESSAGE.to_owned());
    let request = form.begin_submit().unwrap();
    assert_eq!(request, ResetRequest { token: "tok-123".to_owned(), new_password: STRONG.to_owned() });
    assert_eq!(form.password_error, None);
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn later_mismatch_keeps_previous_inline_error() {
    let mut form = filled("weakpassword1", "weakpassword1");
    let _ = form.begin_submit();
    form.confirm_password = "other".to_owned();
    assert_eq!(form.begin_submit(), Err(ResetError::Mismatch));
    assert_eq!(form.password_error.as_deref(), Some(PASSWORD_POLICY_MESSAGE));
}

#[test]
fn submit_while_submitting_is_rejected() {
    let mut form = filled(STRONG, STRONG);
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(ResetError::Busy));
}

#[test]
fn form_without_token_cannot_submit() {
    let mut form = ResetForm {
        new_password: STRONG.to_owned(),
        confirm_password: STRONG.to_owned(),
        ..ResetForm::default()
    };
    assert_eq!(form.begin_submit(), Err(ResetError::MissingToken));
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_calls_service_once_and_reports_success() {
    let api = FakeApi::default();
    let mut form = filled(STRONG, STRONG);
    let notice = submit(&mut form, &api).unwrap();
    assert_eq!(
        api.calls(),
        vec![Call::ResetPassword(ResetRequest { token: "tok-123".to_owned(), new_password: STRONG.to_owned() })]
    );
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, RESET_SUCCESS_TITLE);
    assert_eq!(notice.description, RESET_SUCCESS_MESSAGE);
    assert_eq!(form.phase, SubmitPhase::Succeeded);
}

#[test]
fn failure_shows_generic_notice_and_keeps_fields() {
    let api = FakeApi::failing(ApiError::Status { status: 400, message: Some("Invalid token.".to_owned()) });
    let mut form = filled(STRONG, STRONG);
    let notice = submit(&mut form, &api).unwrap();
    assert_eq!(notice, Notice::error(RESET_FAILURE_MESSAGE));
    assert_eq!(form.phase, SubmitPhase::Failed);
    assert_eq!(form.new_password, STRONG);
    assert_eq!(form.confirm_password, STRONG);
    assert_eq!(form.token, "tok-123");
}

#[test]
fn resubmit_after_failure_issues_new_request() {
    let api = FakeApi::failing(ApiError::Network("offline".to_owned()));
    let mut form = filled(STRONG, STRONG);
    submit(&mut form, &api).unwrap();
    submit(&mut form, &api).unwrap();
    assert_eq!(api.calls().len(), 2);
}
