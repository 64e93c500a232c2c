use std::sync::Arc;

use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
        projection::{RelationshipResolver, Viewer},
    },
    domain::user::{UserRepository, Username},
};

pub struct ProfileQueryService {
    user_repo: Arc<dyn UserRepository>,
    relations: Arc<RelationshipResolver>,
}

impl ProfileQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, relations: Arc<RelationshipResolver>) -> Self {
        Self {
            user_repo,
            relations,
        }
    }

    pub async fn get_profile(&self, viewer: &Viewer, username: &str) -> ApplicationResult<ProfileDto> {
        let username =
            Username::new(username).map_err(|_| ApplicationError::not_found("profile not found"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        let following = self.relations.is_following(viewer, user.id).await?;
        Ok(ProfileDto::from_profile(user.profile(), following))
    }
}
