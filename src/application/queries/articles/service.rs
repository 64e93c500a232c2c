use std::sync::Arc;

use crate::application::projection::ArticleProjector;
use crate::domain::{article::ArticleReadRepository, follow::FollowRepository, user::UserRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) projector: Arc<ArticleProjector>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        projector: Arc<ArticleProjector>,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
            follow_repo,
            projector,
        }
    }
}
