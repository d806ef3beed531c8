//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every backend
//! operation is split into a `begin_*` step, taken before the request is
//! sent, and a `finish_*` step that applies the response.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiResult;
use crate::models::{NewProject, Project, ProjectId};

/// Values bound to the create form inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

impl ProjectForm {
    /// Request body for the current input, or `None` when the name is blank.
    ///
    /// Fields are sent exactly as typed.
    pub fn to_request(&self) -> Option<NewProject> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
    }
}

/// What the project list section shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Empty,
    Populated,
}

impl ListStatus {
    pub fn of(loading: bool, projects: &[Project]) -> Self {
        if loading {
            ListStatus::Loading
        } else if projects.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Populated
        }
    }
}

/// Dashboard view state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct DashboardState {
    /// Server list as of the last successful fetch, plus local edits
    pub projects: Vec<Project>,
    /// A list request is in flight
    pub loading: bool,
    /// A create request is in flight
    pub saving: bool,
    pub form: ProjectForm,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Initial state: empty list, already loading since the first fetch is
    /// issued on mount.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            loading: true,
            saving: false,
            form: ProjectForm::default(),
        }
    }

    pub fn status(&self) -> ListStatus {
        ListStatus::of(self.loading, &self.projects)
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Replace the list wholesale on success; keep it on failure
    pub fn finish_refresh(&mut self, result: ApiResult<Vec<Project>>) {
        match result {
            Ok(projects) => {
                log::info!("Loaded {} projects", projects.len());
                self.projects = projects;
            }
            Err(e) => log::error!("Failed to load projects: {}", e),
        }
        self.loading = false;
    }

    /// Validate the form and mark a create as in flight.
    ///
    /// Returns `None` (and changes nothing) for a blank name or while another
    /// create is still pending.
    pub fn begin_create(&mut self) -> Option<NewProject> {
        if self.saving {
            return None;
        }
        let Some(request) = self.form.to_request() else {
            log::debug!("Ignoring create with blank name");
            return None;
        };
        self.saving = true;
        Some(request)
    }

    /// Prepend the created record and reset the form on success; keep the
    /// form contents on failure
    pub fn finish_create(&mut self, result: ApiResult<Project>) {
        match result {
            Ok(project) => {
                log::info!("Created project {}", project.id);
                self.projects.insert(0, project);
                self.form.clear();
            }
            Err(e) => log::error!("Failed to create project: {}", e),
        }
        self.saving = false;
    }

    /// Drop the entry with `id` on success; keep it on failure
    pub fn finish_delete(&mut self, id: &ProjectId, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                log::info!("Deleted project {}", id);
                self.projects.retain(|project| &project.id != id);
            }
            Err(e) => log::error!("Failed to delete project {}: {}", id, e),
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn project(id: i64, name: &str, description: Option<&str>) -> Project {
        Project {
            id: ProjectId::Number(id),
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn server_error(method: &'static str) -> ApiError {
        ApiError::Status {
            method,
            url: "http://localhost:8000/api/projects".to_string(),
            status: 500,
        }
    }

    fn loaded(projects: Vec<Project>) -> DashboardState {
        let mut state = DashboardState::new();
        state.finish_refresh(Ok(projects));
        state
    }

    fn ids(state: &DashboardState) -> Vec<ProjectId> {
        state.projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DashboardState::new();
        assert_eq!(state.status(), ListStatus::Loading);
        assert!(!state.saving);
    }

    #[test]
    fn test_refresh_populates_list() {
        let state = loaded(vec![
            project(1, "Alpha", Some("first")),
            project(2, "Beta", None),
            project(3, "Gamma", Some("")),
        ]);

        assert_eq!(state.status(), ListStatus::Populated);
        assert_eq!(state.projects.len(), 3);
        assert_eq!(state.projects[0].name, "Alpha");
        assert_eq!(state.projects[0].display_description(), Some("first"));
        assert_eq!(state.projects[1].display_description(), None);
        assert_eq!(state.projects[2].display_description(), None);
    }

    #[test]
    fn test_refresh_with_no_records_is_empty() {
        let state = loaded(Vec::new());
        assert_eq!(state.status(), ListStatus::Empty);
    }

    #[test]
    fn test_refresh_failure_keeps_previous_list() {
        let mut state = loaded(vec![project(1, "Alpha", None)]);

        state.begin_refresh();
        assert_eq!(state.status(), ListStatus::Loading);
        state.finish_refresh(Err(server_error("GET")));

        assert!(!state.loading);
        assert_eq!(ids(&state), vec![ProjectId::Number(1)]);
    }

    #[test]
    fn test_refresh_replaces_rather_than_merges() {
        let mut state = loaded(vec![project(1, "Alpha", None), project(2, "Beta", None)]);
        state.finish_create(Ok(project(3, "Local", None)));

        state.begin_refresh();
        state.finish_refresh(Ok(vec![project(2, "Beta renamed", None), project(4, "Delta", None)]));

        assert_eq!(ids(&state), vec![ProjectId::Number(2), ProjectId::Number(4)]);
        assert_eq!(state.projects[0].name, "Beta renamed");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut state = loaded(vec![project(1, "Alpha", None)]);

        for name in ["", "   ", "\t\n"] {
            state.form.name = name.to_string();
            state.form.description = "something".to_string();
            assert_eq!(state.begin_create(), None);
            assert!(!state.saving);
        }
        assert_eq!(ids(&state), vec![ProjectId::Number(1)]);
    }

    #[test]
    fn test_begin_create_keeps_whitespace() {
        let mut state = loaded(Vec::new());
        state.form.name = "  Launch  ".to_string();

        let request = state.begin_create().unwrap();

        assert_eq!(request.name, "  Launch  ");
        assert_eq!(request.description, "");
        assert!(state.saving);
    }

    #[test]
    fn test_begin_create_while_saving_is_ignored() {
        let mut state = loaded(Vec::new());
        state.form.name = "Launch".to_string();

        assert!(state.begin_create().is_some());
        assert_eq!(state.begin_create(), None);
    }

    #[test]
    fn test_create_success_prepends_and_clears_form() {
        let mut state = loaded(vec![project(1, "Alpha", None), project(2, "Beta", None)]);
        state.form.name = "Launch".to_string();
        state.form.description = "Q3".to_string();

        let _ = state.begin_create().unwrap();
        state.finish_create(Ok(project(9, "Launch", Some("Q3"))));

        assert_eq!(
            ids(&state),
            vec![ProjectId::Number(9), ProjectId::Number(1), ProjectId::Number(2)]
        );
        assert_eq!(state.form, ProjectForm::default());
        assert!(!state.saving);
    }

    #[test]
    fn test_create_failure_keeps_list_and_form() {
        let mut state = loaded(vec![project(1, "Alpha", None)]);
        state.form.name = "Launch".to_string();
        state.form.description = "Q3".to_string();

        let _ = state.begin_create().unwrap();
        state.finish_create(Err(server_error("POST")));

        assert_eq!(ids(&state), vec![ProjectId::Number(1)]);
        assert_eq!(state.form.name, "Launch");
        assert_eq!(state.form.description, "Q3");
        assert!(!state.saving);
    }

    #[test]
    fn test_delete_success_removes_only_that_entry() {
        let mut state = loaded(vec![
            project(1, "Alpha", None),
            project(2, "Beta", None),
            project(3, "Gamma", None),
        ]);

        state.finish_delete(&ProjectId::Number(2), Ok(()));

        assert_eq!(ids(&state), vec![ProjectId::Number(1), ProjectId::Number(3)]);
    }

    #[test]
    fn test_delete_failure_keeps_entry() {
        let mut state = loaded(vec![project(1, "Alpha", None), project(2, "Beta", None)]);

        state.finish_delete(&ProjectId::Number(2), Err(server_error("DELETE")));

        assert_eq!(ids(&state), vec![ProjectId::Number(1), ProjectId::Number(2)]);
    }

    #[test]
    fn test_deleting_last_entry_shows_empty_state() {
        let mut state = loaded(vec![project(1, "Alpha", None)]);

        state.finish_delete(&ProjectId::Number(1), Ok(()));

        assert_eq!(state.status(), ListStatus::Empty);
    }
}
