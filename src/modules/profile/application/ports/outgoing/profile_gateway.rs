use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    CareerDraft, EducationDraft, NewProfile, Profile, ProfileInfoUpdate, SkillDraft, SocialDraft,
};
use crate::shared::api::ApiClientError;

/// Backend access for the profile aggregate.
///
/// Every mutation answers with the whole updated profile, nested collections
/// included; callers replace their copy with it.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// The first (and only) profile, or `None` when none exists yet.
    async fn fetch_profile(&self) -> Result<Option<Profile>, ApiClientError>;
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, ApiClientError>;
    async fn update_profile_info(
        &self,
        id: i64,
        update: ProfileInfoUpdate,
    ) -> Result<Profile, ApiClientError>;
    async fn delete_profile(&self, id: i64) -> Result<(), ApiClientError>;

    async fn add_career(&self, profile_id: i64, career: CareerDraft)
        -> Result<Profile, ApiClientError>;
    async fn update_career(
        &self,
        profile_id: i64,
        career_id: i64,
        career: CareerDraft,
    ) -> Result<Profile, ApiClientError>;
    async fn delete_career(&self, profile_id: i64, career_id: i64)
        -> Result<Profile, ApiClientError>;

    async fn add_education(
        &self,
        profile_id: i64,
        education: EducationDraft,
    ) -> Result<Profile, ApiClientError>;
    async fn update_education(
        &self,
        profile_id: i64,
        education_id: i64,
        education: EducationDraft,
    ) -> Result<Profile, ApiClientError>;
    async fn delete_education(
        &self,
        profile_id: i64,
        education_id: i64,
    ) -> Result<Profile, ApiClientError>;

    async fn add_skill(&self, profile_id: i64, skill: SkillDraft)
        -> Result<Profile, ApiClientError>;
    async fn update_skill(
        &self,
        profile_id: i64,
        skill_id: i64,
        skill: SkillDraft,
    ) -> Result<Profile, ApiClientError>;
    async fn delete_skill(&self, profile_id: i64, skill_id: i64)
        -> Result<Profile, ApiClientError>;

    async fn add_social(&self, profile_id: i64, social: SocialDraft)
        -> Result<Profile, ApiClientError>;
    async fn update_social(
        &self,
        profile_id: i64,
        social_id: i64,
        social: SocialDraft,
    ) -> Result<Profile, ApiClientError>;
    async fn delete_social(&self, profile_id: i64, social_id: i64)
        -> Result<Profile, ApiClientError>;
}
