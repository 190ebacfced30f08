use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::submission::ProjectSubmission;
use crate::shared::api::ApiClientError;

/// Backend access for projects. Fetched projects come back with
/// `title` and `name` already reconciled.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiClientError>;
    /// `None` when the backend does not know the id.
    async fn fetch_project(&self, id: i64) -> Result<Option<Project>, ApiClientError>;
    async fn create_project(&self, submission: ProjectSubmission)
        -> Result<Project, ApiClientError>;
    async fn update_project(
        &self,
        id: i64,
        submission: ProjectSubmission,
    ) -> Result<Project, ApiClientError>;
    async fn delete_project(&self, id: i64) -> Result<(), ApiClientError>;
}
