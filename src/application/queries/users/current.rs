use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The caller's own account, echoing back the token they presented.
    pub async fn current_user(
        &self,
        actor: &AuthenticatedUser,
        token: Option<String>,
    ) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("user not found"))?;

        Ok(UserDto::from_user(user, token))
    }
}
