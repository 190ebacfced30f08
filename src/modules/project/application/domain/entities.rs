use serde::{Deserialize, Serialize};

use crate::modules::multimedia::application::image_url::DEFAULT_PROJECT_IMAGE;
use crate::shared::entity_id::{lenient_entity_id, EntityId};
use crate::shared::serde_ext::{empty_as_none, null_as_default};

/// One problem hit while building a project, and how it was solved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleShooting {
    #[serde(default, deserialize_with = "lenient_entity_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: EntityId,
    /// Display name. The backend only stores `name`; see [`Project::normalize_names`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// `YYYY-MM-DD`, kept verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub troubleshooting: Vec<TroubleShooting>,
}

impl Project {
    /// Makes `title` and `name` agree after a fetch: whichever one is set wins,
    /// `title` first.
    pub fn normalize_names(&mut self) {
        if self.title.is_empty() {
            self.title = self.name.clone();
        } else if self.name.is_empty() {
            self.name = self.title.clone();
        }
    }

    /// Image references in carousel order: thumbnail first, then the other
    /// images in stored order. Never empty.
    pub fn carousel_images(&self) -> Vec<String> {
        let mut ordered = Vec::with_capacity(self.images.len() + 1);

        if let Some(thumbnail) = &self.thumbnail {
            ordered.push(thumbnail.clone());
        }
        ordered.extend(
            self.images
                .iter()
                .filter(|image| Some(*image) != self.thumbnail.as_ref())
                .cloned(),
        );

        if ordered.is_empty() {
            ordered.push(DEFAULT_PROJECT_IMAGE.to_string());
        }
        ordered
    }

    /// Image for list cards: the thumbnail, else the first image.
    pub fn card_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }

    pub fn period_label(&self) -> String {
        match (self.start_date.is_empty(), self.end_date.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("{} -", self.start_date),
            (true, false) => format!("- {}", self.end_date),
            (false, false) => format!("{} - {}", self.start_date, self.end_date),
        }
    }
}
