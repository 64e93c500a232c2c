use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// The authenticated user's own account view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

impl UserDto {
    pub fn from_user(user: User, token: Option<String>) -> Self {
        Self {
            email: user.email.into(),
            token,
            username: user.username.into(),
            bio: user.bio.unwrap_or_default(),
            image: user.image,
        }
    }
}
