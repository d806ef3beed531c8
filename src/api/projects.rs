//! Project Endpoints
//!
//! `GET`, `POST` and `DELETE` on `/api/projects`.

use reqwest::Method;

use super::ProjectsClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewProject, Project, ProjectId};

impl ProjectsClient {
    /// Fetch every project the backend knows about
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let url = self.url(&["api", "projects"])?;
        let request = self.http.request(Method::GET, url.clone());
        let response = self.execute("GET", &url, request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Create a project, returning the stored record with its server id
    pub async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        let url = self.url(&["api", "projects"])?;
        let request = self.http.request(Method::POST, url.clone()).json(project);
        let response = self.execute("POST", &url, request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Delete a project. The response body is not read.
    pub async fn delete_project(&self, id: &ProjectId) -> ApiResult<()> {
        let id = id.to_string();
        let url = self.url(&["api", "projects", &id])?;
        let request = self.http.request(Method::DELETE, url.clone());
        self.execute("DELETE", &url, request).await?;
        Ok(())
    }
}
