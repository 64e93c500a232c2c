use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
    },
    domain::user::{Email, PasswordHash, UserUpdate, Username},
};

#[derive(Default)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let email = command.email.map(Email::new).transpose()?;
        let username = command.username.map(Username::new).transpose()?;

        self.ensure_identity_available(email.as_ref(), username.as_ref(), Some(actor.id))
            .await?;

        let mut update = UserUpdate::new(actor.id, self.clock.now());
        if let Some(email) = email {
            update = update.with_email(email);
        }
        if let Some(username) = username {
            update = update.with_username(username);
        }
        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }
        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }
        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let user = self.user_repo.update(update).await?;
        self.with_fresh_token(user).await
    }
}
