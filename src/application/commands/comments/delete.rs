use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        queries::articles::load_article_by_slug,
    },
    domain::{
        article::specifications::ArticleSpecification,
        comment::{CanDeleteCommentSpec, CommentId},
    },
};

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let article = load_article_by_slug(self.article_repo.as_ref(), &command.slug).await?;
        let comment_id = CommentId::new(command.comment_id)
            .map_err(|_| ApplicationError::not_found("comment not found"))?;

        let comment = self
            .comment_repo
            .find_in_article(article.article.id, comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if !CanDeleteCommentSpec::new(&comment, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you can only delete your own comments",
            ));
        }

        self.comment_repo.delete(comment.id).await?;
        tracing::info!(comment_id = comment.id.0, article_id = article.article.id.0, "comment deleted");
        Ok(())
    }
}
