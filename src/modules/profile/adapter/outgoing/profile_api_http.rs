use async_trait::async_trait;
use reqwest::{multipart::Form, Method};
use serde::Serialize;
use tracing::{debug, info};

use crate::modules::profile::application::domain::entities::{
    CareerDraft, EducationDraft, NewProfile, Profile, ProfileInfoUpdate, SkillDraft, SocialDraft,
};
use crate::modules::profile::application::ports::outgoing::profile_gateway::ProfileGateway;
use crate::shared::api::multipart::file_part;
use crate::shared::api::{ApiClientError, ApiHttpClient};

const PROFILES_PATH: &str = "/api/profiles";

#[derive(Debug, Clone)]
pub struct ProfileApiHttp {
    http: ApiHttpClient,
}

impl ProfileApiHttp {
    pub fn new(http: ApiHttpClient) -> Self {
        Self { http }
    }

    fn profile_path(id: i64) -> String {
        format!("{PROFILES_PATH}/{id}")
    }

    fn collection_path(profile_id: i64, collection: &str) -> String {
        format!("{PROFILES_PATH}/{profile_id}/{collection}")
    }

    fn item_path(profile_id: i64, collection: &str, item_id: i64) -> String {
        format!("{PROFILES_PATH}/{profile_id}/{collection}/{item_id}")
    }

    async fn add_item<B>(
        &self,
        profile_id: i64,
        collection: &str,
        draft: &B,
    ) -> Result<Profile, ApiClientError>
    where
        B: Serialize + Sync,
    {
        debug!("Adding {} to profile {}", collection, profile_id);
        self.http
            .send_json(
                Method::POST,
                &Self::collection_path(profile_id, collection),
                draft,
            )
            .await
    }

    async fn update_item<B>(
        &self,
        profile_id: i64,
        collection: &str,
        item_id: i64,
        draft: &B,
    ) -> Result<Profile, ApiClientError>
    where
        B: Serialize + Sync,
    {
        self.http
            .send_json(
                Method::PUT,
                &Self::item_path(profile_id, collection, item_id),
                draft,
            )
            .await
    }

    async fn delete_item(
        &self,
        profile_id: i64,
        collection: &str,
        item_id: i64,
    ) -> Result<Profile, ApiClientError> {
        self.http
            .request_json(Method::DELETE, &Self::item_path(profile_id, collection, item_id))
            .await
    }

    fn info_form(update: ProfileInfoUpdate) -> Result<Form, ApiClientError> {
        let mut form = Form::new();
        for (key, value) in update.text_fields() {
            form = form.text(key, value);
        }
        if let Some(file) = update.image_file {
            form = form.part("imageFile", file_part(file)?);
        }
        Ok(form)
    }
}

#[async_trait]
impl ProfileGateway for ProfileApiHttp {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ApiClientError> {
        self.http.get_optional_json(PROFILES_PATH).await
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, ApiClientError> {
        let created: Profile = self
            .http
            .send_json(Method::POST, PROFILES_PATH, &profile)
            .await?;
        info!("Profile created: {:?}", created.id);
        Ok(created)
    }

    async fn update_profile_info(
        &self,
        id: i64,
        update: ProfileInfoUpdate,
    ) -> Result<Profile, ApiClientError> {
        let path = Self::profile_path(id);

        if update.image_file.is_some() {
            debug!("Updating profile {} with image", id);
            let form = Self::info_form(update)?;
            return self.http.send_multipart(Method::PUT, &path, form).await;
        }

        self.http.send_json(Method::PUT, &path, &update).await
    }

    async fn delete_profile(&self, id: i64) -> Result<(), ApiClientError> {
        self.http
            .send_empty(Method::DELETE, &Self::profile_path(id))
            .await
    }

    async fn add_career(
        &self,
        profile_id: i64,
        career: CareerDraft,
    ) -> Result<Profile, ApiClientError> {
        self.add_item(profile_id, "careers", &career).await
    }

    async fn update_career(
        &self,
        profile_id: i64,
        career_id: i64,
        career: CareerDraft,
    ) -> Result<Profile, ApiClientError> {
        self.update_item(profile_id, "careers", career_id, &career)
            .await
    }

    async fn delete_career(
        &self,
        profile_id: i64,
        career_id: i64,
    ) -> Result<Profile, ApiClientError> {
        self.delete_item(profile_id, "careers", career_id).await
    }

    async fn add_education(
        &self,
        profile_id: i64,
        education: EducationDraft,
    ) -> Result<Profile, ApiClientError> {
        self.add_item(profile_id, "educations", &education).await
    }

    async fn update_education(
        &self,
        profile_id: i64,
        education_id: i64,
        education: EducationDraft,
    ) -> Result<Profile, ApiClientError> {
        self.update_item(profile_id, "educations", education_id, &education)
            .await
    }

    async fn delete_education(
        &self,
        profile_id: i64,
        education_id: i64,
    ) -> Result<Profile, ApiClientError> {
        self.delete_item(profile_id, "educations", education_id)
            .await
    }

    async fn add_skill(
        &self,
        profile_id: i64,
        skill: SkillDraft,
    ) -> Result<Profile, ApiClientError> {
        self.add_item(profile_id, "skills", &skill).await
    }

    async fn update_skill(
        &self,
        profile_id: i64,
        skill_id: i64,
        skill: SkillDraft,
    ) -> Result<Profile, ApiClientError> {
        self.update_item(profile_id, "skills", skill_id, &skill)
            .await
    }

    async fn delete_skill(
        &self,
        profile_id: i64,
        skill_id: i64,
    ) -> Result<Profile, ApiClientError> {
        self.delete_item(profile_id, "skills", skill_id).await
    }

    async fn add_social(
        &self,
        profile_id: i64,
        social: SocialDraft,
    ) -> Result<Profile, ApiClientError> {
        self.add_item(profile_id, "socials", &social).await
    }

    async fn update_social(
        &self,
        profile_id: i64,
        social_id: i64,
        social: SocialDraft,
    ) -> Result<Profile, ApiClientError> {
        self.update_item(profile_id, "socials", social_id, &social)
            .await
    }

    async fn delete_social(
        &self,
        profile_id: i64,
        social_id: i64,
    ) -> Result<Profile, ApiClientError> {
        self.delete_item(profile_id, "socials", social_id).await
    }
}
