// src/modules/project/application/project_form.rs

use tracing::debug;

use super::domain::entities::{Project, TroubleShooting};
use super::submission::{ProjectPayload, ProjectSubmission, TroubleshootingImage, TroubleshootingPayload};
use crate::modules::multimedia::application::domain::entities::LocalFile;
use crate::modules::multimedia::application::PreviewRegistry;
use crate::shared::entity_id::EntityId;
use crate::shared::validation::{require, FormError};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> String {
    chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(i64),
}

/// A file picked locally together with the preview URL that displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub file: LocalFile,
    pub preview: String,
}

/// One slot of the image gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryItem {
    /// Reference already stored on the backend.
    Persisted(String),
    Pending { file: LocalFile, preview: String },
}

impl GalleryItem {
    /// What an image element should point at.
    pub fn display_ref(&self) -> &str {
        match self {
            GalleryItem::Persisted(reference) => reference,
            GalleryItem::Pending { preview, .. } => preview,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GalleryItem::Pending { .. })
    }
}

/// Free-text inputs of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub role: String,
    pub github: String,
    pub website: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TroubleshootingEntry {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Stored image reference, if any.
    pub image: Option<String>,
    pending: Option<PendingImage>,
}

impl TroubleshootingEntry {
    pub fn pending_image(&self) -> Option<&PendingImage> {
        self.pending.as_ref()
    }

    pub fn display_image(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .map(|p| p.preview.as_str())
            .or(self.image.as_deref())
    }

    fn preview(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.preview.as_str())
    }
}

impl From<&TroubleShooting> for TroubleshootingEntry {
    fn from(item: &TroubleShooting) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            pending: None,
        }
    }
}

/// The sub-form open for a troubleshooting row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingEditor {
    /// `None` while adding a new row.
    pub editing: Option<usize>,
    pub entry: TroubleshootingEntry,
}

/// Editable state of a project create/edit form.
///
/// Owns every preview URL it creates and revokes them on removal,
/// replacement and drop.
#[derive(Debug)]
pub struct ProjectForm {
    mode: FormMode,
    previews: PreviewRegistry,
    pub fields: ProjectFields,
    technologies: Vec<String>,
    gallery: Vec<GalleryItem>,
    thumbnail: Option<usize>,
    deleted_images: Vec<String>,
    troubleshooting: Vec<TroubleshootingEntry>,
    editor: Option<TroubleshootingEditor>,
    error: Option<String>,
}

impl ProjectForm {
    /// Empty form with both dates set to today.
    pub fn new(previews: PreviewRegistry) -> Self {
        let date = today();
        Self {
            mode: FormMode::New,
            previews,
            fields: ProjectFields {
                start_date: date.clone(),
                end_date: date,
                ..ProjectFields::default()
            },
            technologies: Vec::new(),
            gallery: Vec::new(),
            thumbnail: None,
            deleted_images: Vec::new(),
            troubleshooting: Vec::new(),
            editor: None,
            error: None,
        }
    }

    /// Form seeded from a stored project. The thumbnail index is the position
    /// of the stored thumbnail among the images, or 0 when it is not one of them.
    pub fn from_project(project: &Project, previews: PreviewRegistry) -> Self {
        let gallery: Vec<GalleryItem> = project
            .images
            .iter()
            .cloned()
            .map(GalleryItem::Persisted)
            .collect();

        let thumbnail = if gallery.is_empty() {
            None
        } else {
            Some(
                project
                    .thumbnail
                    .as_ref()
                    .and_then(|t| project.images.iter().position(|image| image == t))
                    .unwrap_or(0),
            )
        };

        let mode = match project.id.saved() {
            Some(id) => FormMode::Edit(id),
            None => FormMode::New,
        };

        Self {
            mode,
            previews,
            fields: ProjectFields {
                title: project.title.clone(),
                summary: project.summary.clone(),
                description: project.description.clone(),
                role: project.role.clone().unwrap_or_default(),
                github: project.github.clone().unwrap_or_default(),
                website: project.website.clone().unwrap_or_default(),
                start_date: project.start_date.clone(),
                end_date: project.end_date.clone(),
            },
            technologies: project.technologies.clone(),
            gallery,
            thumbnail,
            deleted_images: Vec::new(),
            troubleshooting: project
                .troubleshooting
                .iter()
                .map(TroubleshootingEntry::from)
                .collect(),
            editor: None,
            error: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    pub fn thumbnail_index(&self) -> Option<usize> {
        self.thumbnail
    }

    pub fn thumbnail(&self) -> Option<&GalleryItem> {
        self.thumbnail.and_then(|i| self.gallery.get(i))
    }

    pub fn deleted_images(&self) -> &[String] {
        &self.deleted_images
    }

    pub fn troubleshooting(&self) -> &[TroubleshootingEntry] {
        &self.troubleshooting
    }

    pub fn editor(&self) -> Option<&TroubleshootingEditor> {
        self.editor.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ------------------------------------------------------------------
    // Gallery
    // ------------------------------------------------------------------

    pub fn add_images(&mut self, files: Vec<LocalFile>) {
        for file in files {
            let preview = self.previews.create(&file);
            self.gallery.push(GalleryItem::Pending { file, preview });
        }
        if self.thumbnail.is_none() && !self.gallery.is_empty() {
            self.thumbnail = Some(0);
        }
    }

    pub fn remove_image(&mut self, index: usize) -> Result<(), FormError> {
        self.check_gallery_index(index)?;

        match self.gallery.remove(index) {
            GalleryItem::Persisted(reference) => {
                if !self.deleted_images.contains(&reference) {
                    debug!("Marking stored image for deletion: {}", reference);
                    self.deleted_images.push(reference);
                }
            }
            GalleryItem::Pending { preview, .. } => {
                self.previews.revoke(&preview);
            }
        }

        self.thumbnail = match self.thumbnail {
            Some(t) if t == index => (!self.gallery.is_empty()).then_some(0),
            Some(t) if index < t => Some(t - 1),
            other => other,
        };
        Ok(())
    }

    pub fn set_thumbnail(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.gallery.len() {
            return Err(FormError::InvalidThumbnail {
                index,
                len: self.gallery.len(),
            });
        }
        self.thumbnail = Some(index);
        Ok(())
    }

    /// Moves one image; the thumbnail keeps pointing at the same image.
    pub fn move_image(&mut self, from: usize, to: usize) -> Result<(), FormError> {
        self.check_gallery_index(from)?;
        self.check_gallery_index(to)?;

        let item = self.gallery.remove(from);
        self.gallery.insert(to, item);

        self.thumbnail = self.thumbnail.map(|t| {
            if t == from {
                to
            } else if from < t && to >= t {
                t - 1
            } else if from > t && to <= t {
                t + 1
            } else {
                t
            }
        });
        Ok(())
    }

    fn check_gallery_index(&self, index: usize) -> Result<(), FormError> {
        if index >= self.gallery.len() {
            return Err(FormError::InvalidIndex {
                index,
                len: self.gallery.len(),
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Technologies
    // ------------------------------------------------------------------

    /// Returns `false` when the trimmed input is empty.
    pub fn add_technology(&mut self, technology: &str) -> bool {
        let technology = technology.trim();
        if technology.is_empty() {
            return false;
        }
        self.technologies.push(technology.to_string());
        true
    }

    pub fn remove_technology(&mut self, index: usize) -> Result<String, FormError> {
        if index >= self.technologies.len() {
            return Err(FormError::InvalidIndex {
                index,
                len: self.technologies.len(),
            });
        }
        Ok(self.technologies.remove(index))
    }

    // ------------------------------------------------------------------
    // Troubleshooting
    // ------------------------------------------------------------------

    pub fn start_troubleshooting(&mut self) {
        self.cancel_troubleshooting();
        self.editor = Some(TroubleshootingEditor {
            editing: None,
            entry: TroubleshootingEntry::default(),
        });
    }

    pub fn edit_troubleshooting(&mut self, index: usize) -> Result<(), FormError> {
        let entry = self
            .troubleshooting
            .get(index)
            .cloned()
            .ok_or(FormError::InvalidIndex {
                index,
                len: self.troubleshooting.len(),
            })?;

        self.cancel_troubleshooting();
        self.editor = Some(TroubleshootingEditor {
            editing: Some(index),
            entry,
        });
        Ok(())
    }

    pub fn active_troubleshooting_mut(&mut self) -> Option<&mut TroubleshootingEntry> {
        self.editor.as_mut().map(|editor| &mut editor.entry)
    }

    pub fn attach_troubleshooting_image(&mut self, file: LocalFile) -> Result<(), FormError> {
        if self.editor.is_none() {
            return Err(FormError::NoActiveTroubleshooting);
        }
        if let Some(stale) = self.editor_owned_preview() {
            self.previews.revoke(&stale);
        }

        let preview = self.previews.create(&file);
        if let Some(editor) = self.editor.as_mut() {
            editor.entry.pending = Some(PendingImage { file, preview });
        }
        Ok(())
    }

    /// Title and description are required; on failure the editor stays open.
    pub fn save_troubleshooting(&mut self) -> Result<(), FormError> {
        let editor = self.editor.as_ref().ok_or(FormError::NoActiveTroubleshooting)?;
        require("title", &editor.entry.title)?;
        require("description", &editor.entry.description)?;

        let Some(editor) = self.editor.take() else {
            return Err(FormError::NoActiveTroubleshooting);
        };

        match editor.editing.filter(|&i| i < self.troubleshooting.len()) {
            Some(index) => {
                if let Some(old) = self.troubleshooting[index].preview() {
                    if Some(old) != editor.entry.preview() {
                        self.previews.revoke(old);
                    }
                }
                self.troubleshooting[index] = editor.entry;
            }
            None => self.troubleshooting.push(editor.entry),
        }
        Ok(())
    }

    pub fn cancel_troubleshooting(&mut self) {
        if let Some(stale) = self.editor_owned_preview() {
            self.previews.revoke(&stale);
        }
        self.editor = None;
    }

    pub fn remove_troubleshooting(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.troubleshooting.len() {
            return Err(FormError::InvalidIndex {
                index,
                len: self.troubleshooting.len(),
            });
        }

        match self.editor.as_ref().and_then(|e| e.editing) {
            Some(editing) if editing == index => self.cancel_troubleshooting(),
            Some(editing) if editing > index => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.editing = Some(editing - 1);
                }
            }
            _ => {}
        }

        let removed = self.troubleshooting.remove(index);
        if let Some(preview) = removed.preview() {
            self.previews.revoke(preview);
        }
        Ok(())
    }

    /// Preview attached in the open editor that no saved row holds yet.
    fn editor_owned_preview(&self) -> Option<String> {
        let editor = self.editor.as_ref()?;
        let preview = editor.entry.preview()?;
        let stored = editor
            .editing
            .and_then(|i| self.troubleshooting.get(i))
            .and_then(TroubleshootingEntry::preview);

        (stored != Some(preview)).then(|| preview.to_string())
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    pub fn build_submission(&self) -> Result<ProjectSubmission, FormError> {
        require("title", &self.fields.title)?;
        require("summary", &self.fields.summary)?;
        require("description", &self.fields.description)?;

        let or_today = |date: &str| {
            if date.trim().is_empty() {
                today()
            } else {
                date.to_string()
            }
        };

        let project = ProjectPayload {
            id: match self.mode {
                FormMode::Edit(id) => Some(id),
                FormMode::New => None,
            },
            name: self.fields.title.clone(),
            title: self.fields.title.clone(),
            summary: self.fields.summary.clone(),
            description: self.fields.description.clone(),
            role: self.fields.role.clone(),
            github: self.fields.github.clone(),
            website: self.fields.website.clone(),
            start_date: or_today(&self.fields.start_date),
            end_date: or_today(&self.fields.end_date),
            technologies: self.technologies.clone(),
            images: Vec::new(),
            thumbnail: String::new(),
            troubleshooting: self
                .troubleshooting
                .iter()
                .map(|entry| TroubleshootingPayload {
                    id: entry.id.saved(),
                    title: entry.title.clone(),
                    description: entry.description.clone(),
                    image: String::new(),
                })
                .collect(),
        };

        let images = self
            .gallery
            .iter()
            .filter_map(|item| match item {
                GalleryItem::Pending { file, .. } => Some(file.clone()),
                GalleryItem::Persisted(_) => None,
            })
            .collect();

        let troubleshooting_images = self
            .troubleshooting
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                entry.pending.as_ref().map(|p| TroubleshootingImage {
                    position,
                    file: p.file.clone(),
                })
            })
            .collect();

        Ok(ProjectSubmission {
            project,
            images,
            thumbnail_index: self.submitted_thumbnail_index(),
            deleted_images: self.deleted_images.clone(),
            troubleshooting_images,
        })
    }

    /// The backend rebuilds the list as kept stored images followed by the
    /// uploads, so the gallery index is translated into that order.
    fn submitted_thumbnail_index(&self) -> Option<usize> {
        let thumbnail = self.thumbnail?;
        let item = self.gallery.get(thumbnail)?;
        let before = &self.gallery[..thumbnail];

        let index = if item.is_pending() {
            let persisted = self.gallery.iter().filter(|i| !i.is_pending()).count();
            persisted + before.iter().filter(|i| i.is_pending()).count()
        } else {
            before.iter().filter(|i| !i.is_pending()).count()
        };
        Some(index)
    }
}

impl Drop for ProjectForm {
    fn drop(&mut self) {
        if let Some(stale) = self.editor_owned_preview() {
            self.previews.revoke(&stale);
        }
        for item in &self.gallery {
            if let GalleryItem::Pending { preview, .. } = item {
                self.previews.revoke(preview);
            }
        }
        for entry in &self.troubleshooting {
            if let Some(preview) = entry.preview() {
                self.previews.revoke(preview);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::saved_project;

    fn png(name: &str) -> LocalFile {
        LocalFile::new(name, "image/png", name.as_bytes().to_vec())
    }

    fn filled(previews: &PreviewRegistry) -> ProjectForm {
        let mut form = ProjectForm::new(previews.clone());
        form.fields.title = "Site".into();
        form.fields.summary = "Summary".into();
        form.fields.description = "Description".into();
        form
    }

    // =====================================================
    // Modes
    // =====================================================

    #[test]
    fn test_new_form_defaults_dates_to_today() {
        let form = ProjectForm::new(PreviewRegistry::new());

        assert_eq!(form.mode(), FormMode::New);
        assert_eq!(form.fields.start_date, today());
        assert_eq!(form.fields.end_date, today());
        assert_eq!(form.thumbnail_index(), None);
    }

    #[test]
    fn test_edit_form_locates_stored_thumbnail() {
        let form = ProjectForm::from_project(&saved_project(4), PreviewRegistry::new());

        assert_eq!(form.mode(), FormMode::Edit(4));
        assert_eq!(form.thumbnail_index(), Some(1));
        assert_eq!(form.fields.title, "Portfolio Site");
        assert_eq!(form.troubleshooting()[0].id, EntityId::Saved(5));
    }

    #[test]
    fn test_edit_form_unknown_thumbnail_falls_back_to_first() {
        let mut project = saved_project(4);
        project.thumbnail = Some("elsewhere.png".into());

        let form = ProjectForm::from_project(&project, PreviewRegistry::new());

        assert_eq!(form.thumbnail_index(), Some(0));
    }

    // =====================================================
    // Gallery and thumbnail
    // =====================================================

    #[test]
    fn test_first_added_image_becomes_thumbnail() {
        let previews = PreviewRegistry::new();
        let mut form = ProjectForm::new(previews.clone());

        form.add_images(vec![png("a.png"), png("b.png")]);

        assert_eq!(form.thumbnail_index(), Some(0));
        assert_eq!(previews.live_count(), 2);
        assert!(PreviewRegistry::is_preview(form.gallery()[1].display_ref()));
    }

    #[test]
    fn test_removing_thumbnail_resets_to_first_or_clears() {
        let mut form = ProjectForm::new(PreviewRegistry::new());
        form.add_images(vec![png("a.png"), png("b.png")]);
        form.set_thumbnail(1).unwrap();

        form.remove_image(1).unwrap();
        assert_eq!(form.thumbnail_index(), Some(0));

        form.remove_image(0).unwrap();
        assert_eq!(form.thumbnail_index(), None);
    }

    #[test]
    fn test_removing_before_thumbnail_shifts_it() {
        let mut form = ProjectForm::from_project(&saved_project(1), PreviewRegistry::new());
        form.set_thumbnail(2).unwrap();

        form.remove_image(0).unwrap();

        assert_eq!(form.thumbnail_index(), Some(1));
        assert_eq!(form.thumbnail().map(GalleryItem::display_ref), Some("c.png"));
    }

    #[test]
    fn test_removing_after_thumbnail_keeps_it() {
        let mut form = ProjectForm::from_project(&saved_project(1), PreviewRegistry::new());

        form.remove_image(2).unwrap();

        assert_eq!(form.thumbnail_index(), Some(1));
    }

    #[test]
    fn test_remove_tracks_stored_refs_and_revokes_previews() {
        let previews = PreviewRegistry::new();
        let mut form = ProjectForm::from_project(&saved_project(1), previews.clone());
        form.add_images(vec![png("new.png")]);
        assert_eq!(previews.live_count(), 1);

        form.remove_image(3).unwrap();
        form.remove_image(0).unwrap();

        assert_eq!(previews.live_count(), 0);
        assert_eq!(form.deleted_images(), ["a.png".to_string()]);
    }

    #[test]
    fn test_set_thumbnail_rejects_out_of_range() {
        let mut form = ProjectForm::new(PreviewRegistry::new());
        form.add_images(vec![png("a.png")]);

        assert_eq!(
            form.set_thumbnail(1),
            Err(FormError::InvalidThumbnail { index: 1, len: 1 })
        );
        assert_eq!(form.thumbnail_index(), Some(0));
    }

    #[test]
    fn test_move_image_thumbnail_follows_its_image() {
        let mut form = ProjectForm::from_project(&saved_project(1), PreviewRegistry::new());

        form.move_image(1, 2).unwrap();
        assert_eq!(form.thumbnail_index(), Some(2));
        assert_eq!(form.thumbnail().map(GalleryItem::display_ref), Some("b.png"));

        form.move_image(0, 2).unwrap();
        assert_eq!(form.thumbnail().map(GalleryItem::display_ref), Some("b.png"));

        assert_eq!(form.move_image(0, 3), Err(FormError::InvalidIndex { index: 3, len: 3 }));
    }

    // =====================================================
    // Technologies
    // =====================================================

    #[test]
    fn test_technologies_trim_and_ignore_blank() {
        let mut form = ProjectForm::new(PreviewRegistry::new());

        assert!(form.add_technology("  Rust "));
        assert!(!form.add_technology("   "));
        assert_eq!(form.technologies(), ["Rust".to_string()]);

        assert_eq!(form.remove_technology(0).unwrap(), "Rust");
        assert!(form.remove_technology(0).is_err());
    }

    // =====================================================
    // Troubleshooting
    // =====================================================

    #[test]
    fn test_save_troubleshooting_requires_title_and_description() {
        let mut form = ProjectForm::new(PreviewRegistry::new());
        form.start_troubleshooting();
        form.active_troubleshooting_mut().unwrap().title = "CORS".into();

        assert_eq!(
            form.save_troubleshooting(),
            Err(FormError::MissingField("description"))
        );
        assert!(form.editor().is_some());

        form.active_troubleshooting_mut().unwrap().description = "Headers".into();
        form.save_troubleshooting().unwrap();

        assert!(form.editor().is_none());
        assert_eq!(form.troubleshooting().len(), 1);
    }

    #[test]
    fn test_edit_troubleshooting_replaces_in_place() {
        let mut form = ProjectForm::from_project(&saved_project(1), PreviewRegistry::new());

        form.edit_troubleshooting(0).unwrap();
        form.active_troubleshooting_mut().unwrap().title = "CORS again".into();
        form.save_troubleshooting().unwrap();

        assert_eq!(form.troubleshooting().len(), 1);
        assert_eq!(form.troubleshooting()[0].title, "CORS again");
        assert_eq!(form.troubleshooting()[0].id, EntityId::Saved(5));
    }

    #[test]
    fn test_attach_without_editor_fails() {
        let mut form = ProjectForm::new(PreviewRegistry::new());

        assert_eq!(
            form.attach_troubleshooting_image(png("x.png")),
            Err(FormError::NoActiveTroubleshooting)
        );
    }

    #[test]
    fn test_replacing_troubleshooting_image_revokes_previous_preview() {
        let previews = PreviewRegistry::new();
        let mut form = ProjectForm::new(previews.clone());
        form.start_troubleshooting();

        form.attach_troubleshooting_image(png("one.png")).unwrap();
        form.attach_troubleshooting_image(png("two.png")).unwrap();
        assert_eq!(previews.live_count(), 1);

        form.cancel_troubleshooting();
        assert_eq!(previews.live_count(), 0);
    }

    #[test]
    fn test_reediting_saved_image_keeps_it_until_replaced() {
        let previews = PreviewRegistry::new();
        let mut form = ProjectForm::new(previews.clone());
        form.start_troubleshooting();
        {
            let entry = form.active_troubleshooting_mut().unwrap();
            entry.title = "Build".into();
            entry.description = "Cache".into();
        }
        form.attach_troubleshooting_image(png("one.png")).unwrap();
        form.save_troubleshooting().unwrap();

        form.edit_troubleshooting(0).unwrap();
        form.cancel_troubleshooting();
        assert_eq!(previews.live_count(), 1);

        form.edit_troubleshooting(0).unwrap();
        form.attach_troubleshooting_image(png("two.png")).unwrap();
        assert_eq!(previews.live_count(), 2);
        form.save_troubleshooting().unwrap();
        assert_eq!(previews.live_count(), 1);
        assert_eq!(
            form.troubleshooting()[0].pending_image().map(|p| p.file.file_name.as_str()),
            Some("two.png")
        );
    }

    #[test]
    fn test_remove_troubleshooting_shifts_open_editor() {
        let mut form = ProjectForm::from_project(&saved_project(1), PreviewRegistry::new());
        form.start_troubleshooting();
        {
            let entry = form.active_troubleshooting_mut().unwrap();
            entry.title = "Second".into();
            entry.description = "Row".into();
        }
        form.save_troubleshooting().unwrap();
        form.edit_troubleshooting(1).unwrap();

        form.remove_troubleshooting(0).unwrap();

        assert_eq!(form.editor().and_then(|e| e.editing), Some(0));
        assert_eq!(form.troubleshooting()[0].title, "Second");
    }

    // =====================================================
    // Submission
    // =====================================================

    #[test]
    fn test_build_submission_requires_fields() {
        let mut form = ProjectForm::new(PreviewRegistry::new());
        form.fields.title = "Site".into();

        assert_eq!(
            form.build_submission(),
            Err(FormError::MissingField("summary"))
        );
    }

    #[test]
    fn test_new_submission_carries_uploads_and_null_id() {
        let previews = PreviewRegistry::new();
        let mut form = filled(&previews);
        form.fields.start_date.clear();
        form.add_images(vec![png("a.png"), png("b.png")]);
        form.set_thumbnail(1).unwrap();

        let submission = form.build_submission().unwrap();

        assert_eq!(submission.project.id, None);
        assert_eq!(submission.project.name, "Site");
        assert_eq!(submission.project.start_date, today());
        assert_eq!(submission.images.len(), 2);
        assert_eq!(submission.thumbnail_index, Some(1));
        assert!(submission.deleted_images.is_empty());
    }

    #[test]
    fn test_edit_submission_translates_thumbnail_to_backend_order() {
        let previews = PreviewRegistry::new();
        let mut form = ProjectForm::from_project(&saved_project(9), previews.clone());
        form.add_images(vec![png("new.png")]);
        form.move_image(3, 0).unwrap();
        form.set_thumbnail(0).unwrap();
        form.remove_image(1).unwrap();

        let submission = form.build_submission().unwrap();

        // backend list: b.png, c.png, new.png
        assert_eq!(submission.project.id, Some(9));
        assert_eq!(submission.deleted_images, vec!["a.png".to_string()]);
        assert_eq!(submission.images[0].file_name, "new.png");
        assert_eq!(submission.thumbnail_index, Some(2));
        assert!(submission.project.images.is_empty());
        assert_eq!(submission.project.thumbnail, "");
    }

    #[test]
    fn test_submission_pairs_troubleshooting_images_with_positions() {
        let previews = PreviewRegistry::new();
        let mut form = ProjectForm::from_project(&saved_project(1), previews.clone());
        form.start_troubleshooting();
        {
            let entry = form.active_troubleshooting_mut().unwrap();
            entry.title = "Deploy".into();
            entry.description = "Fixed env".into();
        }
        form.attach_troubleshooting_image(png("deploy.png")).unwrap();
        form.save_troubleshooting().unwrap();

        let submission = form.build_submission().unwrap();

        assert_eq!(submission.troubleshooting_images.len(), 1);
        assert_eq!(submission.troubleshooting_images[0].position, 1);
        assert_eq!(submission.troubleshooting_images[0].file.file_name, "deploy.png");
        assert_eq!(submission.project.troubleshooting[1].id, None);
        assert!(submission.project.troubleshooting.iter().all(|t| t.image.is_empty()));
    }

    #[test]
    fn test_drop_revokes_every_owned_preview() {
        let previews = PreviewRegistry::new();
        {
            let mut form = ProjectForm::new(previews.clone());
            form.add_images(vec![png("a.png")]);
            form.start_troubleshooting();
            form.attach_troubleshooting_image(png("t.png")).unwrap();
            assert_eq!(previews.live_count(), 2);
        }
        assert_eq!(previews.live_count(), 0);
    }
}
