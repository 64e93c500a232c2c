// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRecord, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{AuthorProfile, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "id, article_id, author_id, body, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentRecordRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
}

impl TryFrom<CommentRecordRow> for CommentRecord {
    type Error = DomainError;

    fn try_from(row: CommentRecordRow) -> Result<Self, Self::Error> {
        let comment = Comment::try_from(row.comment)?;
        let author = AuthorProfile {
            id: comment.author_id,
            username: Username::new(row.author_username)?,
            bio: row.author_bio,
            image: row.author_image,
        };
        Ok(CommentRecord { comment, author })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author_id,
            body,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (article_id, author_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(article_id))
        .bind(i64::from(author_id))
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentRecord>> {
        let rows = sqlx::query_as::<_, CommentRecordRow>(
            "SELECT c.id, c.article_id, c.author_id, c.body, c.created_at, c.updated_at,
                    u.username AS author_username, u.bio AS author_bio, u.image AS author_image
             FROM comments c JOIN users u ON u.id = c.author_id
             WHERE c.article_id = $1
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentRecord::try_from).collect()
    }

    async fn find_in_article(
        &self,
        article_id: ArticleId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND article_id = $2"
        ))
        .bind(i64::from(id))
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
