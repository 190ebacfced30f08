pub mod domain;
pub mod ports;
pub mod project_detail_page;
pub mod project_editor_page;
pub mod project_form;
pub mod projects_page;
pub mod submission;

pub use project_detail_page::ProjectDetailPage;
pub use project_editor_page::{EditorError, ProjectEditorPage, SavedProject};
pub use project_form::{FormMode, GalleryItem, ProjectForm};
pub use projects_page::{ProjectCard, ProjectsPage};
pub use submission::{ProjectPayload, ProjectSubmission, TroubleshootingImage};
