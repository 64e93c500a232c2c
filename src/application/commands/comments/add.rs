use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        queries::articles::load_article_by_slug,
    },
    domain::comment::{CommentBody, CommentRecord, NewComment},
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let body = CommentBody::new(command.body)?;
        let article = load_article_by_slug(self.article_repo.as_ref(), &command.slug).await?;
        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: article.article.id,
                author_id: author.id,
                body,
                created_at: self.clock.now(),
            })
            .await?;

        // The author is the viewer, and nobody follows themselves.
        let record = CommentRecord {
            comment,
            author: author.profile(),
        };
        Ok(CommentDto::from_record(record, false))
    }
}
