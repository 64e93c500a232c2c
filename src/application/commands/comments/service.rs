use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{
    article::ArticleReadRepository, comment::CommentRepository, user::UserRepository,
};

pub struct CommentCommandService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            user_repo,
            clock,
        }
    }
}
