use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentId, CommentRecord, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentRecord>>;

    async fn find_in_article(
        &self,
        article_id: ArticleId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>>;

    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
