use crate::domain::article::{ArticleId, specifications::ArticleSpecification};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{AuthorProfile, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub comment: Comment,
    pub author: AuthorProfile,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}

pub struct CanDeleteCommentSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
}

impl<'a> CanDeleteCommentSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId) -> Self {
        Self { comment, user_id }
    }
}

impl ArticleSpecification for CanDeleteCommentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.comment.author_id == self.user_id
    }
}
