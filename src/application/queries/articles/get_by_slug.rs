use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        projection::Viewer,
    },
    domain::article::{ArticleReadRepository, ArticleRecord, ArticleSlug},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

/// A slug that could never have been generated names no article.
pub async fn load_article_by_slug(
    repo: &dyn ArticleReadRepository,
    raw: &str,
) -> ApplicationResult<ArticleRecord> {
    let slug =
        ArticleSlug::new(raw).map_err(|_| ApplicationError::not_found("article not found"))?;
    repo.find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApplicationError::not_found("article not found"))
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        viewer: &Viewer,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let record = load_article_by_slug(self.read_repo.as_ref(), &query.slug).await?;
        self.projector.project_one(record, viewer).await
    }
}
