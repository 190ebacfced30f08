use serde::{Deserialize, Serialize};

use crate::modules::multimedia::application::domain::entities::LocalFile;
use crate::shared::serde_ext::{empty_as_none, null_as_default};
use crate::shared::validation::{require, require_range, FormError};

pub use crate::shared::entity_id::EntityId;

pub const SKILL_LEVEL_MIN: u8 = 1;
pub const SKILL_LEVEL_MAX: u8 = 5;
pub const DEFAULT_SKILL_CATEGORY: &str = "Other";

// ============================================================================
// Nested rows and their drafts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create/update payload of a career. Carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDraft {
    pub company: String,
    pub position: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CareerDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("company", &self.company)?;
        require("position", &self.position)?;
        require("period", &self.period)
    }
}

impl Career {
    pub fn to_draft(&self) -> CareerDraft {
        CareerDraft {
            company: self.company.clone(),
            position: self.position.clone(),
            period: self.period.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDraft {
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EducationDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("institution", &self.institution)?;
        require("period", &self.period)
    }
}

impl Education {
    pub fn to_draft(&self) -> EducationDraft {
        EducationDraft {
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            period: self.period.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: u8,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub name: String,
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SkillDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require_range(
            "level",
            i64::from(self.level),
            i64::from(SKILL_LEVEL_MIN),
            i64::from(SKILL_LEVEL_MAX),
        )
    }
}

impl Skill {
    pub fn to_draft(&self) -> SkillDraft {
        SkillDraft {
            name: self.name.clone(),
            level: self.level,
            category: self.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDraft {
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SocialDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("platform", &self.platform)
    }
}

impl Social {
    pub fn to_draft(&self) -> SocialDraft {
        SocialDraft {
            platform: self.platform.clone(),
            url: self.url.clone(),
            icon: self.icon.clone(),
        }
    }

    pub fn icon_kind(&self) -> Option<SocialIcon> {
        SocialIcon::from_platform(&self.platform)
    }
}

// ============================================================================
// Profile aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub careers: Vec<Career>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub educations: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socials: Vec<Social>,
}

impl Profile {
    /// A profile is shown as-is only when it was persisted and has a name.
    pub fn is_displayable(&self) -> bool {
        self.id.is_saved() && !self.name.trim().is_empty()
    }

    pub fn links(&self) -> ProfileLinks {
        let mut links = ProfileLinks::default();

        for social in &self.socials {
            let Some(url) = social.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
                continue;
            };

            match social.platform.trim().to_ascii_lowercase().as_str() {
                "github" if links.github.is_none() => {
                    links.github = Some(absolute_or(url, "https://github.com/"));
                }
                "linkedin" if links.linkedin.is_none() => {
                    links.linkedin = Some(absolute_or(url, "https://linkedin.com/in/"));
                }
                "website" | "homepage" | "blog" if links.website.is_none() => {
                    links.website = Some(absolute_or(url, "https://"));
                }
                _ => {}
            }
        }

        links
    }
}

fn absolute_or(value: &str, prefix: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// Header links derived from the socials list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Facebook,
    Instagram,
}

impl SocialIcon {
    pub fn from_platform(platform: &str) -> Option<Self> {
        match platform.trim().to_ascii_lowercase().as_str() {
            "github" => Some(SocialIcon::Github),
            "linkedin" => Some(SocialIcon::Linkedin),
            "twitter" => Some(SocialIcon::Twitter),
            "facebook" => Some(SocialIcon::Facebook),
            "instagram" => Some(SocialIcon::Instagram),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Groups by category in first-seen order; no category means "Other".
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_SKILL_CATEGORY);

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: category.to_string(),
                skills: vec![skill.clone()],
            }),
        }
    }

    groups
}

// ============================================================================
// Profile payloads
// ============================================================================

/// Body of `POST /api/profiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl NewProfile {
    /// Scalar fields of `base`, overridden by whatever `update` sets.
    pub fn merged(base: &Profile, update: &ProfileInfoUpdate) -> Self {
        Self {
            name: update.name.clone().unwrap_or_else(|| base.name.clone()),
            title: update.title.clone().unwrap_or_else(|| base.title.clone()),
            bio: update.bio.clone().or_else(|| base.bio.clone()),
            email: update.email.clone().or_else(|| base.email.clone()),
            phone: update.phone.clone().or_else(|| base.phone.clone()),
            address: update.address.clone().or_else(|| base.address.clone()),
            image: update.image.clone().or_else(|| base.image.clone()),
            location: update.location.clone().or_else(|| base.location.clone()),
        }
    }
}

/// Partial update of the profile header. A pending `image_file` switches the
/// request to multipart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip)]
    pub image_file: Option<LocalFile>,
}

impl ProfileInfoUpdate {
    /// A header update carrying every field of `base`, plus an optional new
    /// image file.
    pub fn replacing(base: NewProfile, image_file: Option<LocalFile>) -> Self {
        Self {
            name: Some(base.name),
            title: Some(base.title),
            bio: base.bio,
            email: base.email,
            phone: base.phone,
            address: base.address,
            location: base.location,
            image: base.image,
            image_file,
        }
    }

    /// Fills every field left unset from `current`. The backend's PUT
    /// overwrites the whole header, so a partial body would clear it.
    pub fn completed_from(self, current: &Profile) -> Self {
        let merged = NewProfile::merged(current, &self);
        Self::replacing(merged, self.image_file)
    }

    /// Text fields in multipart order; empty `name`/`title` are left out.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        for (key, value) in [("name", &self.name), ("title", &self.title)] {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                fields.push((key, v.to_string()));
            }
        }

        for (key, value) in [
            ("bio", &self.bio),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("location", &self.location),
        ] {
            if let Some(v) = value {
                fields.push((key, v.clone()));
            }
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_decodes_backend_dto_with_nulls() {
        let profile: Profile = serde_json::from_value(json!({
            "id": 1,
            "name": "Jane",
            "title": null,
            "image": "me.png",
            "careers": null,
            "skills": [{ "id": 4, "name": "Rust", "level": 5, "category": "" }]
        }))
        .unwrap();

        assert_eq!(profile.id, EntityId::Saved(1));
        assert_eq!(profile.title, "");
        assert!(profile.careers.is_empty());
        assert_eq!(profile.skills[0].category, None);
    }

    // =====================================================
    // Drafts
    // =====================================================

    #[test]
    fn test_career_draft_has_no_id_field() {
        let draft = CareerDraft {
            company: "Acme".into(),
            position: "Eng".into(),
            period: "2020-2023".into(),
            description: Some("Built things".into()),
        };

        let value = serde_json::to_value(&draft).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["company"], "Acme");
    }

    #[test]
    fn test_draft_validation() {
        let skill = SkillDraft {
            name: "Rust".into(),
            level: 0,
            category: None,
        };
        assert!(matches!(
            skill.validate(),
            Err(FormError::OutOfRange { field: "level", .. })
        ));

        let education = EducationDraft {
            institution: "".into(),
            degree: None,
            period: "2015".into(),
            description: None,
        };
        assert_eq!(
            education.validate(),
            Err(FormError::MissingField("institution"))
        );

        let social = SocialDraft {
            platform: "GitHub".into(),
            url: None,
            icon: None,
        };
        assert!(social.validate().is_ok());
    }

    // =====================================================
    // Derived display data
    // =====================================================

    fn social(platform: &str, url: &str) -> Social {
        Social {
            id: EntityId::Saved(1),
            platform: platform.into(),
            url: Some(url.into()),
            icon: None,
        }
    }

    #[test]
    fn test_links_are_derived_from_socials() {
        let profile = Profile {
            socials: vec![
                social("GitHub", "octocat"),
                social("LinkedIn", "https://linkedin.com/in/jane"),
                social("Website", "jane.dev"),
            ],
            ..Profile::default()
        };

        let links = profile.links();

        assert_eq!(links.github.as_deref(), Some("https://github.com/octocat"));
        assert_eq!(links.linkedin.as_deref(), Some("https://linkedin.com/in/jane"));
        assert_eq!(links.website.as_deref(), Some("https://jane.dev"));
    }

    #[test]
    fn test_social_icon_matches_case_insensitively() {
        assert_eq!(SocialIcon::from_platform("GitHub"), Some(SocialIcon::Github));
        assert_eq!(SocialIcon::from_platform("INSTAGRAM"), Some(SocialIcon::Instagram));
        assert_eq!(SocialIcon::from_platform("Mastodon"), None);
    }

    #[test]
    fn test_group_skills_keeps_first_seen_order() {
        let skill = |name: &str, category: Option<&str>| Skill {
            id: EntityId::Unsaved,
            name: name.into(),
            level: 3,
            category: category.map(str::to_string),
        };

        let groups = group_skills(&[
            skill("React", Some("Frontend")),
            skill("Node.js", Some("Backend")),
            skill("Docker", None),
            skill("TypeScript", Some("Frontend")),
        ]);

        let summary: Vec<(&str, usize)> = groups
            .iter()
            .map(|g| (g.category.as_str(), g.skills.len()))
            .collect();
        assert_eq!(summary, vec![("Frontend", 2), ("Backend", 1), ("Other", 1)]);
    }

    #[test]
    fn test_is_displayable_requires_saved_id_and_name() {
        let mut profile = Profile {
            id: EntityId::Saved(1),
            name: "Jane".into(),
            ..Profile::default()
        };
        assert!(profile.is_displayable());

        profile.name = " ".into();
        assert!(!profile.is_displayable());

        profile.name = "Jane".into();
        profile.id = EntityId::Unsaved;
        assert!(!profile.is_displayable());
    }

    #[test]
    fn test_info_update_text_fields_skip_empty_name() {
        let update = ProfileInfoUpdate {
            name: Some(String::new()),
            title: Some("Engineer".into()),
            bio: Some(String::new()),
            ..ProfileInfoUpdate::default()
        };

        assert_eq!(
            update.text_fields(),
            vec![("title", "Engineer".to_string()), ("bio", String::new())]
        );
    }
    #[test]
    fn test_info_update_completed_from_current_profile() {
        let current = Profile {
            id: EntityId::Saved(1),
            name: "Jane".into(),
            title: "Engineer".into(),
            bio: Some("Old bio".into()),
            email: Some("jane@example.com".into()),
            phone: Some("555".into()),
            image: Some("jane.png".into()),
            ..Profile::default()
        };
        let file = LocalFile::new("new.png", "image/png", b"IMG".to_vec());

        let update = ProfileInfoUpdate {
            bio: Some("New bio".into()),
            image_file: Some(file.clone()),
            ..ProfileInfoUpdate::default()
        }
        .completed_from(&current);

        assert_eq!(update.name.as_deref(), Some("Jane"));
        assert_eq!(update.title.as_deref(), Some("Engineer"));
        assert_eq!(update.bio.as_deref(), Some("New bio"));
        assert_eq!(update.email.as_deref(), Some("jane@example.com"));
        assert_eq!(update.phone.as_deref(), Some("555"));
        assert_eq!(update.image.as_deref(), Some("jane.png"));
        assert_eq!(update.image_file, Some(file));
    }
}
