//! Project List Component
//!
//! Loading indicator, empty state, or one row per project, plus the manual
//! refresh button.

use leptos::prelude::*;

use crate::components::ProjectRow;
use crate::context::use_app_context;
use crate::store::{use_dashboard_store, DashboardStateStoreFields, ListStatus};

const LOADING_TEXT: &str = "Loading...";
const EMPTY_TEXT: &str = "No projects yet. Create your first project above.";

#[component]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    // Only flips between variants; row updates are handled by <For>
    let status = Memo::new(move |_| {
        ListStatus::of(store.loading().get(), &store.projects().read())
    });

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">"Projects"</h2>
                <button class="refresh-btn" on:click=move |_| ctx.refresh()>
                    "Refresh"
                </button>
            </div>
            {move || match status.get() {
                ListStatus::Loading => view! {
                    <div class="muted">{LOADING_TEXT}</div>
                }.into_any(),
                ListStatus::Empty => view! {
                    <div class="muted">{EMPTY_TEXT}</div>
                }.into_any(),
                ListStatus::Populated => view! {
                    <ul class="project-list">
                        <For
                            each=move || store.projects().get()
                            key=|project| project.clone()
                            children=move |project| view! { <ProjectRow project=project /> }
                        />
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}
