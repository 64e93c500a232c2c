use std::sync::Arc;

use crate::application::{
    dto::{TokenSubject, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{Email, User, UserId, UserRepository, Username};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn with_fresh_token(&self, user: User) -> ApplicationResult<UserDto> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;
        Ok(UserDto::from_user(user, Some(token.token)))
    }

    /// Email and username stay unique; `owner` may keep its own values.
    pub(super) async fn ensure_identity_available(
        &self,
        email: Option<&Email>,
        username: Option<&Username>,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        let taken_by_other = |user: Option<User>| user.is_some_and(|user| Some(user.id) != owner);

        if let Some(email) = email {
            if taken_by_other(self.user_repo.find_by_email(email).await?) {
                return Err(ApplicationError::conflict("email or username already exists"));
            }
        }
        if let Some(username) = username {
            if taken_by_other(self.user_repo.find_by_username(username).await?) {
                return Err(ApplicationError::conflict("email or username already exists"));
            }
        }
        Ok(())
    }
}
