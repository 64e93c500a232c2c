// src/application/commands/articles/service.rs
use std::future::Future;
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        projection::ArticleProjector,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
            ArticleWriteRepository,
            services::ArticleSlugService,
            specifications::{ArticleSpecification, CanModifyArticleSpec},
        },
        errors::{DomainError, DomainResult},
        user::UserRepository,
    },
};

/// Writes that lose a slug race are re-resolved at most this many times in total.
pub const MAX_SLUG_ATTEMPTS: u32 = 3;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) projector: Arc<ArticleProjector>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<ArticleSlugService>,
        projector: Arc<ArticleProjector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            slug_service,
            projector,
            clock,
        }
    }

    /// Resolve a free slug for `title` and hand it to `write`. When the storage
    /// constraint reports the slug as taken anyway, resolve again and retry.
    pub(super) async fn write_with_unique_slug<T, F, Fut>(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
        mut write: F,
    ) -> ApplicationResult<T>
    where
        F: FnMut(ArticleSlug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        let mut attempt = 1;
        loop {
            let slug = self
                .slug_service
                .generate_unique_slug(title, ignore_id)
                .await?;

            match write(slug.clone()).await {
                Err(DomainError::Conflict(reason)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(slug = %slug, attempt, %reason, "slug claimed concurrently, retrying");
                    attempt += 1;
                }
                Err(DomainError::Conflict(_)) => {
                    return Err(ApplicationError::conflict(
                        "article with similar title already exists",
                    ));
                }
                result => return result.map_err(ApplicationError::from),
            }
        }
    }
}

pub(super) fn ensure_can_modify(
    actor: &AuthenticatedUser,
    article: &Article,
    action: &str,
) -> ApplicationResult<()> {
    if CanModifyArticleSpec::new(article, actor.id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "you can only {action} your own articles"
        )))
    }
}
