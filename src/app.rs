//! Projects Dashboard App
//!
//! Root component: create form above the project list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ProjectsClient;
use crate::components::{CreateProjectForm, PageHeader, ProjectList};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::DashboardState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(DashboardState::new());
    let ctx = AppContext::new(store, ProjectsClient::new(&config));

    // Provide store and actions to all children
    provide_context(store);
    provide_context(ctx);

    // Load projects on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <div class="app-layout">
            <PageHeader />

            <main class="main-content">
                <CreateProjectForm />
                <ProjectList />
            </main>

            <footer class="page-footer">"Built with Leptos + Rust"</footer>
        </div>
    }
}
