// src/modules/project/application/projects_page.rs

use serde::Serialize;
use tracing::{error, info, warn};

use super::domain::entities::Project;
use super::ports::outgoing::project_gateway::ProjectGateway;
use crate::modules::auth::application::AuthContext;
use crate::modules::multimedia::application::image_url::{ImageUrlResolver, DEFAULT_PROJECT_IMAGE};
use crate::shared::entity_id::EntityId;
use crate::shared::page_state::PageStatus;

pub const PROJECTS_ROUTE: &str = "/projects";
pub const LOAD_PROJECTS_FAILED: &str = "Failed to load projects.";
pub const LOAD_PROJECT_FAILED: &str = "Failed to load the project.";
pub const DELETE_PROJECT_FAILED: &str = "Failed to delete the project.";

pub fn project_route(id: i64) -> String {
    format!("{PROJECTS_ROUTE}/{id}")
}

/// One tile of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: Option<i64>,
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub period: String,
    /// Detail route; `None` for a project without a stored id.
    pub href: Option<String>,
}

pub struct ProjectsPage<G>
where
    G: ProjectGateway,
{
    gateway: G,
    projects: Vec<Project>,
    status: PageStatus,
}

impl<G> ProjectsPage<G>
where
    G: ProjectGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            projects: Vec::new(),
            status: PageStatus::loading(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    /// A failed load keeps whatever list was shown before.
    pub async fn load(&mut self) {
        self.status.begin();

        match self.gateway.fetch_projects().await {
            Ok(projects) => {
                self.projects = projects;
                self.status.dismiss();
            }
            Err(e) => {
                error!("Error loading projects: {}", e);
                self.status.fail(LOAD_PROJECTS_FAILED);
            }
        }

        self.status.finish();
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Deletes one project, then reloads the list. Returns whether the delete
    /// went through.
    pub async fn delete_project(&mut self, auth: &AuthContext, id: EntityId) -> bool {
        if !auth.is_logged_in() {
            warn!("Delete attempted while logged out");
            return false;
        }
        let Some(project_id) = id.saved() else {
            self.status.fail(DELETE_PROJECT_FAILED);
            return false;
        };

        match self.gateway.delete_project(project_id).await {
            Ok(()) => {
                info!("Project deleted: {}", project_id);
                self.refresh().await;
                true
            }
            Err(e) => {
                error!("Error deleting project {}: {}", project_id, e);
                self.status.fail(DELETE_PROJECT_FAILED);
                false
            }
        }
    }

    pub fn cards(&self, images: &ImageUrlResolver) -> Vec<ProjectCard> {
        self.projects
            .iter()
            .map(|project| ProjectCard {
                id: project.id.saved(),
                title: project.title.clone(),
                summary: project.summary.clone(),
                image_url: images.resolve_or(project.card_image(), DEFAULT_PROJECT_IMAGE),
                technologies: project.technologies.clone(),
                period: project.period_label(),
                href: project.id.saved().map(project_route),
            })
            .collect()
    }
}
