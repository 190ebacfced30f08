// src/modules/profile/application/home_page.rs

use serde::Serialize;
use tracing::{error, info, warn};

use super::defaults::{default_profile, loading_placeholder};
use super::domain::entities::{
    group_skills, Career, CareerDraft, Education, EducationDraft, EntityId, NewProfile, Profile,
    ProfileInfoUpdate, ProfileLinks, Skill, SkillDraft, SkillGroup, Social, SocialDraft,
    SocialIcon,
};
use super::ports::outgoing::profile_gateway::ProfileGateway;
use crate::modules::auth::application::AuthContext;
use crate::modules::multimedia::application::image_url::{ImageUrlResolver, DEFAULT_PROFILE_IMAGE};
use crate::shared::api::ApiClientError;
use crate::shared::page_state::{Banner, PageStatus};
use crate::shared::validation::FormError;

pub const DEFAULT_DATA_NOTICE: &str =
    "Showing default profile data. Save the profile info to create a new profile.";
pub const PROFILE_CREATED_MESSAGE: &str = "Profile created successfully.";

/// One edit of a nested profile collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileMutation {
    AddCareer(CareerDraft),
    UpdateCareer(Career),
    DeleteCareer(EntityId),
    AddEducation(EducationDraft),
    UpdateEducation(Education),
    DeleteEducation(EntityId),
    AddSkill(SkillDraft),
    UpdateSkill(Skill),
    DeleteSkill(EntityId),
    AddSocial(SocialDraft),
    UpdateSocial(Social),
    DeleteSocial(EntityId),
}

impl ProfileMutation {
    pub fn describe(&self) -> &'static str {
        match self {
            ProfileMutation::AddCareer(_) => "add career",
            ProfileMutation::UpdateCareer(_) => "update career",
            ProfileMutation::DeleteCareer(_) => "delete career",
            ProfileMutation::AddEducation(_) => "add education",
            ProfileMutation::UpdateEducation(_) => "update education",
            ProfileMutation::DeleteEducation(_) => "delete education",
            ProfileMutation::AddSkill(_) => "add skill",
            ProfileMutation::UpdateSkill(_) => "update skill",
            ProfileMutation::DeleteSkill(_) => "delete skill",
            ProfileMutation::AddSocial(_) => "add social link",
            ProfileMutation::UpdateSocial(_) => "update social link",
            ProfileMutation::DeleteSocial(_) => "delete social link",
        }
    }

    /// The existing row this mutation targets; `None` for adds.
    fn target(&self) -> Option<EntityId> {
        match self {
            ProfileMutation::UpdateCareer(c) => Some(c.id),
            ProfileMutation::UpdateEducation(e) => Some(e.id),
            ProfileMutation::UpdateSkill(s) => Some(s.id),
            ProfileMutation::UpdateSocial(s) => Some(s.id),
            ProfileMutation::DeleteCareer(id)
            | ProfileMutation::DeleteEducation(id)
            | ProfileMutation::DeleteSkill(id)
            | ProfileMutation::DeleteSocial(id) => Some(*id),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        match self {
            ProfileMutation::AddCareer(d) => d.validate(),
            ProfileMutation::UpdateCareer(c) => c.to_draft().validate(),
            ProfileMutation::AddEducation(d) => d.validate(),
            ProfileMutation::UpdateEducation(e) => e.to_draft().validate(),
            ProfileMutation::AddSkill(d) => d.validate(),
            ProfileMutation::UpdateSkill(s) => s.to_draft().validate(),
            ProfileMutation::AddSocial(d) => d.validate(),
            ProfileMutation::UpdateSocial(s) => s.to_draft().validate(),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLinkView {
    pub platform: String,
    pub url: Option<String>,
    pub icon: Option<SocialIcon>,
}

/// Everything the home page renders, already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub loading: bool,
    pub banner: Option<Banner>,
    pub can_edit: bool,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub image_url: String,
    pub links: ProfileLinks,
    pub careers: Vec<Career>,
    pub educations: Vec<Education>,
    pub skill_groups: Vec<SkillGroup>,
    pub socials: Vec<SocialLinkView>,
}

/// Owns the profile aggregate for the home page.
///
/// Every successful mutation replaces the local copy with the backend's
/// response; failures keep the previous copy and raise an error banner.
pub struct HomePage<G>
where
    G: ProfileGateway,
{
    gateway: G,
    profile: Profile,
    has_profile_data: bool,
    status: PageStatus,
}

impl<G> HomePage<G>
where
    G: ProfileGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            profile: loading_placeholder(),
            has_profile_data: false,
            status: PageStatus::loading(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn has_profile_data(&self) -> bool {
        self.has_profile_data
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn dismiss_banner(&mut self) {
        self.status.dismiss();
    }

    pub async fn load(&mut self) {
        self.status.begin();
        self.status.dismiss();

        match self.gateway.fetch_profile().await {
            Ok(Some(profile)) if profile.is_displayable() => {
                self.profile = profile;
                self.has_profile_data = true;
            }
            Ok(_) => {
                warn!("No valid profile data returned from API, using default data");
                self.profile = default_profile();
                self.has_profile_data = false;
            }
            Err(e) => {
                error!("Error loading profile: {}", e);
                self.status
                    .fail("Failed to load the profile. Showing default data.");
                self.profile = default_profile();
                self.has_profile_data = false;
            }
        }

        self.status.finish();
    }

    /// Saves the header fields. Without profile data this creates the profile
    /// from the defaults first.
    pub async fn update_info(&mut self, update: ProfileInfoUpdate) -> bool {
        if !self.has_profile_data {
            return self.bootstrap(update).await;
        }

        let Some(profile_id) = self.profile.id.saved() else {
            self.status
                .fail("Cannot update profile information: the profile is not saved.");
            return false;
        };

        let update = update.completed_from(&self.profile);

        self.status.begin();
        let result = self.gateway.update_profile_info(profile_id, update).await;
        self.status.finish();

        match result {
            Ok(profile) => {
                self.profile = profile;
                self.status.dismiss();
                true
            }
            Err(e) => {
                error!("Error updating profile: {}", e);
                self.status.fail("Failed to update profile information.");
                false
            }
        }
    }

    pub async fn add_career(&mut self, career: CareerDraft) -> bool {
        self.apply(ProfileMutation::AddCareer(career)).await
    }

    pub async fn update_career(&mut self, career: Career) -> bool {
        self.apply(ProfileMutation::UpdateCareer(career)).await
    }

    pub async fn delete_career(&mut self, id: EntityId) -> bool {
        self.apply(ProfileMutation::DeleteCareer(id)).await
    }

    pub async fn add_education(&mut self, education: EducationDraft) -> bool {
        self.apply(ProfileMutation::AddEducation(education)).await
    }

    pub async fn update_education(&mut self, education: Education) -> bool {
        self.apply(ProfileMutation::UpdateEducation(education)).await
    }

    pub async fn delete_education(&mut self, id: EntityId) -> bool {
        self.apply(ProfileMutation::DeleteEducation(id)).await
    }

    pub async fn add_skill(&mut self, skill: SkillDraft) -> bool {
        self.apply(ProfileMutation::AddSkill(skill)).await
    }

    pub async fn update_skill(&mut self, skill: Skill) -> bool {
        self.apply(ProfileMutation::UpdateSkill(skill)).await
    }

    pub async fn delete_skill(&mut self, id: EntityId) -> bool {
        self.apply(ProfileMutation::DeleteSkill(id)).await
    }

    pub async fn add_social(&mut self, social: SocialDraft) -> bool {
        self.apply(ProfileMutation::AddSocial(social)).await
    }

    pub async fn update_social(&mut self, social: Social) -> bool {
        self.apply(ProfileMutation::UpdateSocial(social)).await
    }

    pub async fn delete_social(&mut self, id: EntityId) -> bool {
        self.apply(ProfileMutation::DeleteSocial(id)).await
    }

    /// Runs one nested mutation. Returns whether the profile was replaced.
    pub async fn apply(&mut self, mutation: ProfileMutation) -> bool {
        let action = mutation.describe();

        let profile_id = match self.profile.id.saved() {
            Some(id) if self.has_profile_data => id,
            _ => {
                self.status.fail(format!(
                    "No profile data, cannot {action}. Save the profile info first."
                ));
                return false;
            }
        };

        if let Some(EntityId::Unsaved) = mutation.target() {
            self.status
                .fail(format!("Cannot {action}: the entry has not been saved yet."));
            return false;
        }

        if let Err(e) = mutation.validate() {
            self.status.fail(format!("Cannot {action}: {e}."));
            return false;
        }

        self.status.begin();
        let result = self.dispatch(profile_id, mutation).await;
        self.status.finish();

        match result {
            Ok(profile) => {
                self.profile = profile;
                self.status.dismiss();
                true
            }
            Err(e) => {
                error!("Error trying to {}: {}", action, e);
                self.status.fail(format!("Failed to {action}."));
                false
            }
        }
    }

    pub fn view(&self, auth: &AuthContext, images: &ImageUrlResolver) -> HomeView {
        let banner = self.status.banner().cloned().or_else(|| {
            (auth.is_logged_in() && !self.has_profile_data)
                .then(|| Banner::Notice(DEFAULT_DATA_NOTICE.to_string()))
        });

        HomeView {
            loading: self.status.is_loading(),
            banner,
            can_edit: auth.is_logged_in(),
            name: self.profile.name.clone(),
            title: self.profile.title.clone(),
            bio: self.profile.bio.clone().unwrap_or_default(),
            email: self.profile.email.clone().unwrap_or_default(),
            image_url: images.resolve_or(self.profile.image.as_deref(), DEFAULT_PROFILE_IMAGE),
            links: self.profile.links(),
            careers: self.profile.careers.clone(),
            educations: self.profile.educations.clone(),
            skill_groups: group_skills(&self.profile.skills),
            socials: self
                .profile
                .socials
                .iter()
                .map(|s| SocialLinkView {
                    platform: s.platform.clone(),
                    url: s.url.clone(),
                    icon: s.icon_kind(),
                })
                .collect(),
        }
    }

    async fn dispatch(
        &self,
        profile_id: i64,
        mutation: ProfileMutation,
    ) -> Result<Profile, ApiClientError> {
        let gateway = &self.gateway;

        match mutation {
            ProfileMutation::AddCareer(d) => gateway.add_career(profile_id, d).await,
            ProfileMutation::UpdateCareer(c) => {
                let id = saved_id(c.id)?;
                gateway.update_career(profile_id, id, c.to_draft()).await
            }
            ProfileMutation::DeleteCareer(id) => {
                gateway.delete_career(profile_id, saved_id(id)?).await
            }
            ProfileMutation::AddEducation(d) => gateway.add_education(profile_id, d).await,
            ProfileMutation::UpdateEducation(e) => {
                let id = saved_id(e.id)?;
                gateway.update_education(profile_id, id, e.to_draft()).await
            }
            ProfileMutation::DeleteEducation(id) => {
                gateway.delete_education(profile_id, saved_id(id)?).await
            }
            ProfileMutation::AddSkill(d) => gateway.add_skill(profile_id, d).await,
            ProfileMutation::UpdateSkill(s) => {
                let id = saved_id(s.id)?;
                gateway.update_skill(profile_id, id, s.to_draft()).await
            }
            ProfileMutation::DeleteSkill(id) => {
                gateway.delete_skill(profile_id, saved_id(id)?).await
            }
            ProfileMutation::AddSocial(d) => gateway.add_social(profile_id, d).await,
            ProfileMutation::UpdateSocial(s) => {
                let id = saved_id(s.id)?;
                gateway.update_social(profile_id, id, s.to_draft()).await
            }
            ProfileMutation::DeleteSocial(id) => {
                gateway.delete_social(profile_id, saved_id(id)?).await
            }
        }
    }

    /// Creates the profile, then posts each default row one by one. A failed
    /// row is logged and skipped.
    async fn bootstrap(&mut self, update: ProfileInfoUpdate) -> bool {
        let defaults = default_profile();
        let base = NewProfile::merged(&defaults, &update);

        self.status.begin();

        let created = match self.gateway.create_profile(base.clone()).await {
            Ok(profile) => profile,
            Err(e) => {
                error!("Error creating profile: {}", e);
                self.status.finish();
                self.status.fail("Failed to create the profile.");
                return false;
            }
        };

        let Some(profile_id) = created.id.saved() else {
            error!("Created profile came back without an id");
            self.status.finish();
            self.status.fail("Failed to create the profile.");
            return false;
        };

        let mut current = created;

        for career in &defaults.careers {
            match self.gateway.add_career(profile_id, career.to_draft()).await {
                Ok(profile) => current = profile,
                Err(e) => warn!("Error adding default career: {}", e),
            }
        }
        for education in &defaults.educations {
            match self
                .gateway
                .add_education(profile_id, education.to_draft())
                .await
            {
                Ok(profile) => current = profile,
                Err(e) => warn!("Error adding default education: {}", e),
            }
        }
        for skill in &defaults.skills {
            match self.gateway.add_skill(profile_id, skill.to_draft()).await {
                Ok(profile) => current = profile,
                Err(e) => warn!("Error adding default skill: {}", e),
            }
        }
        for social in &defaults.socials {
            match self.gateway.add_social(profile_id, social.to_draft()).await {
                Ok(profile) => current = profile,
                Err(e) => warn!("Error adding default social: {}", e),
            }
        }

        if let Some(file) = update.image_file {
            let with_image = ProfileInfoUpdate::replacing(base, Some(file));
            match self
                .gateway
                .update_profile_info(profile_id, with_image)
                .await
            {
                Ok(profile) => current = profile,
                Err(e) => warn!("Error uploading profile image: {}", e),
            }
        }

        info!("Profile {} bootstrapped from defaults", profile_id);
        self.profile = current;
        self.has_profile_data = true;
        self.status.finish();
        self.status.succeed(PROFILE_CREATED_MESSAGE);
        true
    }
}

fn saved_id(id: EntityId) -> Result<i64, ApiClientError> {
    id.saved()
        .ok_or_else(|| ApiClientError::InvalidId("unsaved entry".to_string()))
}
