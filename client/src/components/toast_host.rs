//! Renders the shared notice queue in a fixed corner stack.

use leptos::prelude::*;

use crate::state::toast::{Notice, Toast, ToastState};

/// Queue `notice` and, in the browser, remove it once it has been visible
/// for `NOTICE_DURATION`.
pub fn show_notice(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::toast::NOTICE_DURATION).await;
        toasts.update(|t| {
            t.dismiss(id);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.notice.kind.css_class()>
                            <strong class="toast__title">{toast.notice.title}</strong>
                            <p class="toast__description">{toast.notice.description}</p>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Cerrar"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
