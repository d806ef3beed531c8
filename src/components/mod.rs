//! UI Components
//!
//! Leptos components for the dashboard page.

mod create_project_form;
mod page_header;
mod project_list;
mod project_row;

pub use create_project_form::CreateProjectForm;
pub use page_header::PageHeader;
pub use project_list::ProjectList;
pub use project_row::ProjectRow;
