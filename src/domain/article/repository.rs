use crate::domain::article::entity::{Article, ArticleFilter, ArticleRecord, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::Conflict` when a new slug is already taken.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>>;
    /// Newest first (`created_at DESC`, then insertion order). `None` loads every match.
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: Option<PageRequest>,
    ) -> DomainResult<Vec<ArticleRecord>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
}
