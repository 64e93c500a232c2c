use crate::domain::comment::CommentRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ProfileDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: ProfileDto,
}

impl CommentDto {
    pub fn from_record(record: CommentRecord, following: bool) -> Self {
        let CommentRecord { comment, author } = record;
        Self {
            id: comment.id.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            body: comment.body.into(),
            author: ProfileDto::from_profile(author, following),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCommentDto {
    pub message: String,
    pub deleted_comment_id: i64,
}
