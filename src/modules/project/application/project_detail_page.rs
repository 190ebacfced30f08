// src/modules/project/application/project_detail_page.rs

use tracing::{error, info, warn};

use super::domain::entities::Project;
use super::ports::outgoing::project_gateway::ProjectGateway;
use super::projects_page::{DELETE_PROJECT_FAILED, LOAD_PROJECT_FAILED, PROJECTS_ROUTE};
use crate::modules::auth::application::AuthContext;
use crate::modules::multimedia::application::image_url::ImageUrlResolver;
use crate::shared::api::parse_numeric_id;
use crate::shared::page_state::PageStatus;

pub const PROJECT_NOT_FOUND: &str = "Project not found.";

/// A single project with its image carousel.
pub struct ProjectDetailPage<G>
where
    G: ProjectGateway,
{
    gateway: G,
    project: Option<Project>,
    carousel: Vec<String>,
    current: usize,
    deleting: bool,
    status: PageStatus,
}

impl<G> ProjectDetailPage<G>
where
    G: ProjectGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            project: None,
            carousel: Vec::new(),
            current: 0,
            deleting: false,
            status: PageStatus::loading(),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn carousel(&self) -> &[String] {
        &self.carousel
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Loads the project behind a route id. Ids the backend could never know
    /// (`"new"`, garbage) fail without a request.
    pub async fn load(&mut self, id: &str) {
        self.status.begin();
        self.status.dismiss();

        let result = match parse_numeric_id(id) {
            Ok(id) => self.gateway.fetch_project(id).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(Some(project)) => {
                self.carousel = project.carousel_images();
                self.current = 0;
                self.project = Some(project);
            }
            Ok(None) => {
                warn!("Project {} not found", id);
                self.project = None;
                self.carousel.clear();
                self.status.fail(PROJECT_NOT_FOUND);
            }
            Err(e) => {
                error!("Error loading project {}: {}", id, e);
                self.project = None;
                self.carousel.clear();
                self.status.fail(LOAD_PROJECT_FAILED);
            }
        }

        self.status.finish();
    }

    pub fn next_image(&mut self) {
        if !self.carousel.is_empty() {
            self.current = (self.current + 1) % self.carousel.len();
        }
    }

    pub fn prev_image(&mut self) {
        if !self.carousel.is_empty() {
            self.current = (self.current + self.carousel.len() - 1) % self.carousel.len();
        }
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.carousel.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn current_image_url(&self, images: &ImageUrlResolver) -> Option<String> {
        self.carousel
            .get(self.current)
            .map(|reference| images.resolve(Some(reference)))
    }

    /// Deletes the shown project. On success returns the route to go to next.
    pub async fn delete(&mut self, auth: &AuthContext) -> Option<String> {
        if !auth.is_logged_in() {
            warn!("Delete attempted while logged out");
            return None;
        }
        let project_id = self.project.as_ref().and_then(|p| p.id.saved())?;

        self.deleting = true;
        let result = self.gateway.delete_project(project_id).await;
        self.deleting = false;

        match result {
            Ok(()) => {
                info!("Project deleted: {}", project_id);
                self.project = None;
                self.carousel.clear();
                Some(PROJECTS_ROUTE.to_string())
            }
            Err(e) => {
                error!("Error deleting project {}: {}", project_id, e);
                self.status.fail(DELETE_PROJECT_FAILED);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::MemorySessionStore;
    use crate::modules::project::application::submission::ProjectSubmission;
    use crate::shared::api::ApiClientError;
    use crate::tests::support::fixtures::saved_project;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use std::sync::Arc;

    mock! {
        pub ProjectGatewayMock {}
        #[async_trait]
        impl ProjectGateway for ProjectGatewayMock {
            async fn fetch_projects(&self) -> Result<Vec<Project>, ApiClientError>;
            async fn fetch_project(&self, id: i64) -> Result<Option<Project>, ApiClientError>;
            async fn create_project(&self, submission: ProjectSubmission) -> Result<Project, ApiClientError>;
            async fn update_project(&self, id: i64, submission: ProjectSubmission) -> Result<Project, ApiClientError>;
            async fn delete_project(&self, id: i64) -> Result<(), ApiClientError>;
        }
    }

    fn auth(logged_in: bool) -> AuthContext {
        let mut auth = AuthContext::restore(Arc::new(MemorySessionStore::new()), "secret");
        if logged_in {
            auth.login();
        }
        auth
    }

    async fn loaded_page(gateway: MockProjectGatewayMock) -> ProjectDetailPage<MockProjectGatewayMock> {
        let mut page = ProjectDetailPage::new(gateway);
        page.load("1").await;
        page
    }

    fn gateway_with_project() -> MockProjectGatewayMock {
        let mut gateway = MockProjectGatewayMock::new();
        gateway
            .expect_fetch_project()
            .with(eq(1))
            .returning(|id| Ok(Some(saved_project(id))));
        gateway
    }

    // =====================================================
    // Loading
    // =====================================================

    #[tokio::test]
    async fn test_load_builds_carousel_with_thumbnail_first() {
        let page = loaded_page(gateway_with_project()).await;

        assert!(!page.status().is_loading());
        assert_eq!(page.carousel(), ["b.png", "a.png", "c.png"]);
        assert_eq!(
            page.current_image_url(&ImageUrlResolver::new("http://api.test")),
            Some("http://api.test/api/images/b.png".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_rejects_sentinel_id_without_request() {
        let mut gateway = MockProjectGatewayMock::new();
        gateway.expect_fetch_project().never();

        let mut page = ProjectDetailPage::new(gateway);
        page.load("new").await;

        assert!(page.project().is_none());
        assert_eq!(page.status().error(), Some(LOAD_PROJECT_FAILED));
    }

    #[tokio::test]
    async fn test_load_missing_project() {
        let mut gateway = MockProjectGatewayMock::new();
        gateway.expect_fetch_project().returning(|_| Ok(None));

        let page = loaded_page(gateway).await;

        assert_eq!(page.status().error(), Some(PROJECT_NOT_FOUND));
    }

    // =====================================================
    // Carousel
    // =====================================================

    #[tokio::test]
    async fn test_carousel_wraps_both_ways() {
        let mut page = loaded_page(gateway_with_project()).await;

        page.prev_image();
        assert_eq!(page.current_index(), 2);
        page.next_image();
        assert_eq!(page.current_index(), 0);
        page.next_image();
        page.next_image();
        page.next_image();
        assert_eq!(page.current_index(), 0);

        assert!(page.select_image(2));
        assert!(!page.select_image(3));
        assert_eq!(page.current_index(), 2);
    }

    #[test]
    fn test_carousel_moves_are_noops_before_load() {
        let mut page = ProjectDetailPage::new(MockProjectGatewayMock::new());

        page.next_image();
        page.prev_image();

        assert_eq!(page.current_index(), 0);
        assert_eq!(page.current_image_url(&ImageUrlResolver::new("http://api.test")), None);
    }

    // =====================================================
    // Delete
    // =====================================================

    #[tokio::test]
    async fn test_delete_redirects_to_list() {
        let mut gateway = gateway_with_project();
        gateway
            .expect_delete_project()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));
        let mut page = loaded_page(gateway).await;

        let redirect = page.delete(&auth(true)).await;

        assert_eq!(redirect.as_deref(), Some(PROJECTS_ROUTE));
        assert!(page.project().is_none());
        assert!(!page.is_deleting());
    }

    #[tokio::test]
    async fn test_delete_requires_login() {
        let mut gateway = gateway_with_project();
        gateway.expect_delete_project().never();
        let mut page = loaded_page(gateway).await;

        assert_eq!(page.delete(&auth(false)).await, None);
        assert!(page.project().is_some());
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_project_and_raises_banner() {
        let mut gateway = gateway_with_project();
        gateway.expect_delete_project().returning(|_| {
            Err(ApiClientError::Transport("connection refused".into()))
        });
        let mut page = loaded_page(gateway).await;

        assert_eq!(page.delete(&auth(true)).await, None);
        assert!(page.project().is_some());
        assert_eq!(page.status().error(), Some(DELETE_PROJECT_FAILED));
    }
}
