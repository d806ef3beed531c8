//! Page Header Component

use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header-inner">
                <h1 class="page-title">"SaaS Starter"</h1>
                <div class="page-subtitle">"Simple projects dashboard"</div>
            </div>
        </header>
    }
}
