// src/modules/project/application/project_editor_page.rs

use thiserror::Error;
use tracing::{error, info, warn};

use super::domain::entities::Project;
use super::ports::outgoing::project_gateway::ProjectGateway;
use super::project_form::{FormMode, ProjectForm};
use super::projects_page::{project_route, LOAD_PROJECT_FAILED, PROJECTS_ROUTE};
use crate::modules::auth::application::AuthContext;
use crate::modules::multimedia::application::PreviewRegistry;
use crate::shared::api::{parse_numeric_id, ApiClientError};
use crate::shared::page_state::PageStatus;
use crate::shared::validation::FormError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The caller should send the visitor back to the project list.
    #[error("Login required to edit projects")]
    NotLoggedIn,

    #[error("Project not found")]
    NotFound,

    #[error("No project form is open")]
    FormNotOpen,

    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl EditorError {
    /// Where to send the visitor when the editor cannot be shown.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            EditorError::NotLoggedIn | EditorError::NotFound => Some(PROJECTS_ROUTE),
            _ => None,
        }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedProject {
    pub project: Project,
    pub redirect: String,
}

/// The new/edit project page: owns the form and sends it.
pub struct ProjectEditorPage<G>
where
    G: ProjectGateway,
{
    gateway: G,
    previews: PreviewRegistry,
    form: Option<ProjectForm>,
    submitting: bool,
    status: PageStatus,
}

impl<G> ProjectEditorPage<G>
where
    G: ProjectGateway,
{
    pub fn new(gateway: G, previews: PreviewRegistry) -> Self {
        Self {
            gateway,
            previews,
            form: None,
            submitting: false,
            status: PageStatus::default(),
        }
    }

    pub fn form(&self) -> Option<&ProjectForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ProjectForm> {
        self.form.as_mut()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn open_new(&mut self, auth: &AuthContext) -> Result<(), EditorError> {
        if !auth.is_logged_in() {
            return Err(EditorError::NotLoggedIn);
        }
        self.status.dismiss();
        self.form = Some(ProjectForm::new(self.previews.clone()));
        Ok(())
    }

    pub async fn open_edit(&mut self, auth: &AuthContext, id: &str) -> Result<(), EditorError> {
        if !auth.is_logged_in() {
            return Err(EditorError::NotLoggedIn);
        }

        self.form = None;
        self.status.begin();
        self.status.dismiss();
        let result = match parse_numeric_id(id) {
            Ok(project_id) => self.gateway.fetch_project(project_id).await,
            Err(e) => Err(e),
        };
        self.status.finish();

        match result {
            Ok(Some(project)) => {
                self.form = Some(ProjectForm::from_project(&project, self.previews.clone()));
                Ok(())
            }
            Ok(None) => {
                warn!("Project {} not found for editing", id);
                Err(EditorError::NotFound)
            }
            Err(e) => {
                error!("Error loading project {} for editing: {}", id, e);
                self.status.fail(LOAD_PROJECT_FAILED);
                Err(EditorError::Api(e))
            }
        }
    }

    /// Validates and sends the form. On failure the form stays open with its
    /// error message set.
    pub async fn submit(&mut self) -> Result<SavedProject, EditorError> {
        let form = self.form.as_mut().ok_or(EditorError::FormNotOpen)?;
        form.clear_error();

        let submission = match form.build_submission() {
            Ok(submission) => submission,
            Err(e) => {
                form.set_error(e.to_string());
                return Err(EditorError::Form(e));
            }
        };

        let mode = form.mode();
        self.submitting = true;
        let result = match mode {
            FormMode::Edit(id) => self.gateway.update_project(id, submission).await,
            FormMode::New => self.gateway.create_project(submission).await,
        };
        self.submitting = false;

        match result {
            Ok(project) => {
                info!("Project saved: {:?}", project.id);
                let redirect = match mode {
                    FormMode::Edit(id) => project_route(id),
                    FormMode::New => PROJECTS_ROUTE.to_string(),
                };
                Ok(SavedProject { project, redirect })
            }
            Err(e) => {
                error!("Error saving project: {}", e);
                form.set_error(format!("Failed to save project: {e}"));
                Err(EditorError::Api(e))
            }
        }
    }
}
