//! Forgot-password page: asks the backend to mail a reset link.

use leptos::prelude::*;

use crate::components::toast_host::show_notice;
use crate::net::api::{HttpApi, PortalApi};
use crate::state::forgot::ForgotForm;
use crate::state::toast::ToastState;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ForgotForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(email)) = form.try_update(ForgotForm::begin_submit) else {
            // EmptyEmail is rendered inline; Busy is ignored.
            return;
        };
        leptos::task::spawn_local(async move {
            let result = HttpApi.forgot_password(&email).await;
            if let Some(notice) = form.try_update(|f| f.complete(result)) {
                show_notice(toasts, notice);
            }
        });
    };

    let busy = move || form.with(|f| f.phase.is_busy());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Recuperar Contraseña"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="email">"Correo electrónico"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="tu@escuela.edu"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="auth-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Enviando..." } else { "Enviar enlace" }}
                    </button>
                </form>
                <a class="auth-link" href="/login">"Volver al inicio de sesión"</a>
            </div>
        </div>
    }
}
