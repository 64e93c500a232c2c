use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        self.ensure_identity_available(Some(&email), Some(&username), None)
            .await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            email,
            username,
            password_hash: PasswordHash::new(hashed)?,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = user.id.0, username = %user.username, "user registered");

        self.with_fresh_token(user).await
    }
}
