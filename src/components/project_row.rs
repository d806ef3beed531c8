//! Project Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Project;

/// A single project entry with its delete action
#[component]
pub fn ProjectRow(project: Project) -> impl IntoView {
    let ctx = use_app_context();

    let id = project.id.clone();
    let description = project.display_description().map(str::to_owned);

    view! {
        <li class="project-row">
            <div>
                <div class="project-name">{project.name}</div>
                {description.map(|d| view! { <div class="project-description">{d}</div> })}
            </div>
            <button
                class="delete-btn"
                on:click=move |_| ctx.delete(id.clone())
            >
                "Delete"
            </button>
        </li>
    }
}
