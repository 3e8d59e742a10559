//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    forgot_password::ForgotPasswordPage, login::LoginPage, reset_password::ResetPasswordPage,
    send_notifications::SendNotificationsPage,
};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared toast queue; every page owns its own form state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal Escolar"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot_password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset_password") view=ResetPasswordPage/>
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("notifications"))
                    view=SendNotificationsPage
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
