//! Create Project Form Component
//!
//! Name and description inputs bound to the store's form state.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Submit button text for the current saving state
fn submit_label(saving: bool) -> &'static str {
    if saving {
        "Adding..."
    } else {
        "Add project"
    }
}

/// Form for creating new projects
#[component]
pub fn CreateProjectForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create();
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Create project"</h2>
            <form class="create-project-form" on:submit=on_submit>
                <input
                    type="text"
                    class="text-input"
                    placeholder="Project name"
                    prop:value=move || store.form().read().name.clone()
                    on:input=move |ev| {
                        store.form().write().name = event_target_value(&ev);
                    }
                />
                <input
                    type="text"
                    class="text-input"
                    placeholder="Description (optional)"
                    prop:value=move || store.form().read().description.clone()
                    on:input=move |ev| {
                        store.form().write().description = event_target_value(&ev);
                    }
                />
                <button
                    type="submit"
                    class="primary-btn"
                    disabled=move || store.saving().get()
                >
                    {move || submit_label(store.saving().get())}
                </button>
            </form>
        </section>
    }
}
