// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, service::ensure_can_modify};
use crate::application::{
    dto::AuthenticatedUser, error::ApplicationResult, queries::articles::load_article_by_slug,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let existing = load_article_by_slug(self.read_repo.as_ref(), &command.slug).await?;
        ensure_can_modify(actor, &existing.article, "delete")?;

        self.write_repo.delete(existing.article.id).await?;
        tracing::info!(article_id = existing.article.id.0, slug = %existing.article.slug, "article deleted");
        Ok(())
    }
}
