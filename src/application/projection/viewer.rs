use crate::application::dto::AuthenticatedUser;
use crate::domain::user::UserId;

/// Who is asking. Built per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    User(UserId),
}

impl Viewer {
    pub fn from_actor(actor: Option<&AuthenticatedUser>) -> Self {
        actor.map_or(Self::Anonymous, Self::from)
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(*id),
        }
    }
}

impl From<&AuthenticatedUser> for Viewer {
    fn from(actor: &AuthenticatedUser) -> Self {
        Self::User(actor.id)
    }
}
