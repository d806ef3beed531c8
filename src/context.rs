//! Application Context
//!
//! Backend actions provided via Leptos Context API. Each action applies its
//! `begin_*` step synchronously, then spawns the request and applies the
//! `finish_*` step when it resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ProjectsClient;
use crate::models::ProjectId;
use crate::store::{DashboardState, DashboardStore};

/// App-wide store and backend client
#[derive(Clone, Copy)]
pub struct AppContext {
    store: DashboardStore,
    client: StoredValue<ProjectsClient, LocalStorage>,
}

impl AppContext {
    pub fn new(store: DashboardStore, client: ProjectsClient) -> Self {
        Self {
            store,
            client: StoredValue::new_local(client),
        }
    }

    /// Re-fetch the project list, replacing the local copy
    pub fn refresh(&self) {
        let store = self.store;
        let client = self.client.get_value();
        store.update(DashboardState::begin_refresh);

        spawn_local(async move {
            let result = client.list_projects().await;
            store.update(|state| state.finish_refresh(result));
        });
    }

    /// Submit the create form. Blank names never reach the backend.
    pub fn create(&self) {
        let store = self.store;
        let Some(Some(request)) = store.try_update(DashboardState::begin_create) else {
            return;
        };
        let client = self.client.get_value();

        spawn_local(async move {
            let result = client.create_project(&request).await;
            store.update(|state| state.finish_create(result));
        });
    }

    pub fn delete(&self, id: ProjectId) {
        let store = self.store;
        let client = self.client.get_value();

        spawn_local(async move {
            let result = client.delete_project(&id).await;
            store.update(|state| state.finish_delete(&id, result));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
