use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    follow::FollowRepository,
    user::{User, UserRepository, Username},
};

pub struct ProfileCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
}

impl ProfileCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    pub(super) async fn load_target(&self, username: &str) -> ApplicationResult<User> {
        let username =
            Username::new(username).map_err(|_| ApplicationError::not_found("profile not found"))?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))
    }
}
