use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the owning author may update or delete an article.
pub struct CanModifyArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanModifyArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for CanModifyArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}
