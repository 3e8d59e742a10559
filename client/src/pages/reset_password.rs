//! Password reset page reached from the recovery email link.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend mails `/reset_password?token=...`. Without a token the page
//! reports the problem and sends the user to `/login`; with one it collects
//! the new password and posts it once validation passes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toast_host::show_notice;
use crate::net::api::HttpApi;
use crate::state::reset::{self, ResetError, ResetForm, token_from_query};
use crate::state::toast::{Notice, ToastState};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let form = RwSignal::new(ResetForm::default());

    let navigate_missing = navigate.clone();
    Effect::new(move || match token_from_query(query.with(|q| q.get("token"))) {
        Ok(token) => form.update(|f| f.token = token),
        Err(e) => {
            show_notice(toasts, Notice::error(e.to_string()));
            navigate_missing("/login", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(prepared) = form.try_update(ResetForm::begin_submit) else {
            return;
        };
        let request = match prepared {
            Ok(request) => request,
            Err(e @ (ResetError::Mismatch | ResetError::MissingToken)) => {
                show_notice(toasts, Notice::error(e.to_string()));
                return;
            }
            // Inline message already set, or a request is still pending.
            Err(ResetError::WeakPassword | ResetError::Busy) => return,
        };

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = reset::send(&HttpApi, &request).await;
            let succeeded = result.is_ok();
            if let Some(notice) = form.try_update(|f| f.complete(result)) {
                show_notice(toasts, notice);
            }
            if succeeded {
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    let busy = move || form.with(|f| f.phase.is_busy());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Restablecer Contraseña"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="new-password">"Nueva Contraseña"</label>
                    <input
                        id="new-password"
                        class="auth-input"
                        type="password"
                        required=true
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                    <label class="auth-label" for="confirm-password">"Confirmar Contraseña"</label>
                    <input
                        id="confirm-password"
                        class="auth-input"
                        type="password"
                        required=true
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <Show when=move || form.with(|f| f.password_error.is_some())>
                        <p class="auth-error">
                            {move || form.with(|f| f.password_error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Restableciendo..." } else { "Restablecer Contraseña" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
