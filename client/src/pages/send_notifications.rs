//! Teacher page for composing and sending notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Teachers pick a year and session, then either broadcast to the whole
//! course or address one student/parent by DNI. The DNI search only fills a
//! display name; the DNI itself is what the backend receives.

use leptos::prelude::*;

use crate::components::toast_host::show_notice;
use crate::net::api::{HttpApi, PortalApi};
use crate::state::notify::{DispatchError, NotificationForm, SESSION_OPTIONS, YEAR_OPTIONS, dispatch};
use crate::state::toast::{Notice, ToastState};

#[component]
pub fn SendNotificationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(NotificationForm::default());

    let on_search = move |_| {
        let Some(Some(dni)) = form.try_update(NotificationForm::lookup_key) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = HttpApi.verify_child_by_dni(&dni).await;
            if let Some(Some(notice)) = form.try_update(|f| f.apply_lookup(result)) {
                show_notice(toasts, notice);
            }
        });
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(prepared) = form.try_update(NotificationForm::begin_submit) else {
            return;
        };
        let plan = match prepared {
            Ok(plan) => plan,
            Err(DispatchError::Busy) => return,
            Err(e) => {
                show_notice(toasts, Notice::error(e.to_string()));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = dispatch(&HttpApi, &plan).await;
            if let Some(notice) = form.try_update(|f| f.complete(result)) {
                show_notice(toasts, notice);
            }
        });
    };

    let busy = move || form.with(|f| f.phase.is_busy());

    view! {
        <div class="composer-page">
            <div class="composer-card">
                <h1 class="composer-card__title">"Enviar Notificación"</h1>
                <form class="composer-form" on:submit=on_send>
                    <div class="composer-section">
                        <label class="composer-label" for="year">"Año:"</label>
                        <select
                            id="year"
                            class="composer-select"
                            prop:value=move || form.with(|f| f.year.clone())
                            on:change=move |ev| form.update(|f| f.year = event_target_value(&ev))
                        >
                            <option value="">"Seleccionar año"</option>
                            {YEAR_OPTIONS.into_iter().map(|y| view! { <option value=y>{y}</option> }).collect_view()}
                        </select>

                        <label class="composer-label" for="session">"Turno:"</label>
                        <select
                            id="session"
                            class="composer-select"
                            prop:value=move || form.with(|f| f.session.clone())
                            on:change=move |ev| form.update(|f| f.session = event_target_value(&ev))
                        >
                            <option value="">"Seleccionar turno"</option>
                            {SESSION_OPTIONS.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                        </select>
                    </div>

                    <div class="composer-section">
                        <label class="composer-label" for="send-to">"Enviar a:"</label>
                        <select
                            id="send-to"
                            class="composer-select"
                            prop:value=move || form.with(|f| f.send_to.clone())
                            on:change=move |ev| form.update(|f| f.select_target(event_target_value(&ev)))
                        >
                            <option value="" disabled=true>"Elige una opción"</option>
                            <option value="all">"Todos los estudiantes y padres"</option>
                            <option value="student">"Estudiante en particular"</option>
                            <option value="parent">"Padre en particular"</option>
                        </select>
                    </div>

                    <Show when=move || form.with(NotificationForm::needs_dni)>
                        <div class="composer-section">
                            <label class="composer-label" for="dni">"Buscar por DNI:"</label>
                            <input
                                id="dni"
                                class="composer-input"
                                placeholder="Ingrese el DNI"
                                prop:value=move || form.with(|f| f.dni.clone())
                                on:input=move |ev| form.update(|f| f.dni = event_target_value(&ev))
                            />
                            <button
                                class="composer-button composer-button--secondary"
                                type="button"
                                disabled=move || !form.with(NotificationForm::can_search)
                                on:click=on_search
                            >
                                "Buscar"
                            </button>
                            <Show when=move || form.with(|f| !f.full_name.is_empty())>
                                <p class="composer-recipient">
                                    <strong>"Nombre del estudiante: "</strong>
                                    {move || form.with(|f| f.full_name.clone())}
                                </p>
                            </Show>
                        </div>
                    </Show>

                    <Show when=move || form.with(|f| !f.send_to.is_empty())>
                        <div class="composer-section">
                            <textarea
                                class="composer-textarea"
                                rows="4"
                                placeholder="Escribe el mensaje aquí..."
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                            <button class="composer-button" type="submit" disabled=busy>
                                {move || if busy() { "Enviando..." } else { "Enviar" }}
                            </button>
                        </div>
                    </Show>
                </form>
            </div>
        </div>
    }
}
