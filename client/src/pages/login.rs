//! Login landing page; the redirect target after a password reset.

use leptos::prelude::*;

/// Static landing card. Signing in happens in the main school portal; this
/// page only offers the password recovery entry point.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Iniciar Sesión"</h1>
                <p class="auth-card__subtitle">"Portal escolar"</p>
                <a href="/forgot_password" class="auth-link">
                    "¿Olvidaste tu contraseña?"
                </a>
            </div>
        </div>
    }
}
