use async_trait::async_trait;
use reqwest::{multipart::Form, Method};
use tracing::{debug, info, warn};

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_gateway::ProjectGateway;
use crate::modules::project::application::submission::ProjectSubmission;
use crate::shared::api::multipart::{file_part, json_part};
use crate::shared::api::{ApiClientError, ApiHttpClient};

const PROJECTS_PATH: &str = "/api/projects";

#[derive(Debug, Clone)]
pub struct ProjectApiHttp {
    http: ApiHttpClient,
}

impl ProjectApiHttp {
    pub fn new(http: ApiHttpClient) -> Self {
        Self { http }
    }

    fn project_path(id: i64) -> String {
        format!("{PROJECTS_PATH}/{id}")
    }

    /// Multipart layout the backend expects for create and update.
    fn submission_form(mut submission: ProjectSubmission) -> Result<Form, ApiClientError> {
        if submission.project.sync_name_with_title() {
            debug!("Project name synced with title: {}", submission.project.title);
        }

        let project_json = serde_json::to_string(&submission.project)
            .map_err(|e| ApiClientError::InvalidPart(e.to_string()))?;
        let mut form = Form::new().part("project", json_part(project_json)?);

        for file in submission.images {
            form = form.part("images", file_part(file)?);
        }

        if let Some(index) = submission.thumbnail_index {
            form = form.text("thumbnailIndex", index.to_string());
        }

        if !submission.deleted_images.is_empty() {
            let deleted = serde_json::to_string(&submission.deleted_images)
                .map_err(|e| ApiClientError::InvalidPart(e.to_string()))?;
            form = form.text("deletedImages", deleted);
        }

        for image in submission.troubleshooting_images {
            form = form
                .part("troubleshootingImages", file_part(image.file)?)
                .text("troubleshootingImageIndices", image.position.to_string());
        }

        Ok(form)
    }

    fn normalized(mut project: Project) -> Project {
        project.normalize_names();
        project
    }
}

#[async_trait]
impl ProjectGateway for ProjectApiHttp {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiClientError> {
        let projects: Option<Vec<Project>> = self.http.get_optional_json(PROJECTS_PATH).await?;
        let projects = projects.unwrap_or_else(|| {
            warn!("Project list endpoint returned nothing");
            Vec::new()
        });
        Ok(projects.into_iter().map(Self::normalized).collect())
    }

    async fn fetch_project(&self, id: i64) -> Result<Option<Project>, ApiClientError> {
        let project: Option<Project> = self
            .http
            .get_optional_json(&Self::project_path(id))
            .await?;
        Ok(project.map(Self::normalized))
    }

    async fn create_project(
        &self,
        submission: ProjectSubmission,
    ) -> Result<Project, ApiClientError> {
        let form = Self::submission_form(submission)?;
        let created: Project = self
            .http
            .send_multipart(Method::POST, PROJECTS_PATH, form)
            .await?;
        info!("Project created: {:?}", created.id);
        Ok(Self::normalized(created))
    }

    async fn update_project(
        &self,
        id: i64,
        submission: ProjectSubmission,
    ) -> Result<Project, ApiClientError> {
        let form = Self::submission_form(submission)?;
        let updated: Project = self
            .http
            .send_multipart(Method::PUT, &Self::project_path(id), form)
            .await?;
        info!("Project updated: {}", id);
        Ok(Self::normalized(updated))
    }

    async fn delete_project(&self, id: i64) -> Result<(), ApiClientError> {
        self.http
            .send_empty(Method::DELETE, &Self::project_path(id))
            .await
    }
}
