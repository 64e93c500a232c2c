use crate::domain::user::AuthorProfile;
use serde::{Deserialize, Serialize};

/// Viewer-relative view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub following: bool,
}

impl ProfileDto {
    pub fn from_profile(profile: AuthorProfile, following: bool) -> Self {
        Self {
            username: profile.username.into(),
            bio: profile.bio.unwrap_or_default(),
            image: profile.image,
            following,
        }
    }
}
