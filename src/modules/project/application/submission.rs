// src/modules/project/application/submission.rs

use serde::Serialize;

use crate::modules::multimedia::application::domain::entities::LocalFile;

/// Troubleshooting row as sent inside the `project` JSON part. Images travel
/// as separate file parts, so `image` is always empty here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingPayload {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// The `project` JSON part of a create/update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub id: Option<i64>,
    pub name: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub role: String,
    pub github: String,
    pub website: String,
    pub start_date: String,
    pub end_date: String,
    pub technologies: Vec<String>,
    /// Always empty: the backend keeps its stored list and applies
    /// `deletedImages` plus the uploaded files to it.
    pub images: Vec<String>,
    pub thumbnail: String,
    pub troubleshooting: Vec<TroubleshootingPayload>,
}

impl ProjectPayload {
    /// The backend only knows `name`. Returns whether it had to be rewritten.
    pub fn sync_name_with_title(&mut self) -> bool {
        if self.title.is_empty() || self.name == self.title {
            return false;
        }
        self.name = self.title.clone();
        true
    }
}

/// A new troubleshooting image and the position of its row in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingImage {
    pub position: usize,
    pub file: LocalFile,
}

/// Everything a create or update request carries.
///
/// `thumbnail_index` points into the list the backend ends up with: kept
/// stored images first, in gallery order, followed by `images`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    pub project: ProjectPayload,
    pub images: Vec<LocalFile>,
    pub thumbnail_index: Option<usize>,
    pub deleted_images: Vec<String>,
    pub troubleshooting_images: Vec<TroubleshootingImage>,
}
