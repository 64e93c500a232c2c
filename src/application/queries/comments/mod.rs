use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::ApplicationResult,
        projection::{RelationshipResolver, Viewer},
        queries::articles::load_article_by_slug,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct CommentQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    relations: Arc<RelationshipResolver>,
}

impl CommentQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        relations: Arc<RelationshipResolver>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            relations,
        }
    }

    /// Newest first; follow state for all comment authors is resolved together.
    pub async fn list_comments(&self, viewer: &Viewer, slug: &str) -> ApplicationResult<Vec<CommentDto>> {
        let article = load_article_by_slug(self.article_repo.as_ref(), slug).await?;
        let records = self.comment_repo.list_by_article(article.article.id).await?;

        let follows = self
            .relations
            .follow_map(viewer, records.iter().map(|record| record.author.id))
            .await?;

        Ok(records
            .into_iter()
            .map(|record| {
                let following = follows.is_following(record.author.id);
                CommentDto::from_record(record, following)
            })
            .collect())
    }
}
