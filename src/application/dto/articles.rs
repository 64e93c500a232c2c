use crate::domain::article::ArticleRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ProfileDto, serde_time};

/// `Detail` carries the body; `Summary` is used by list and feed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleShape {
    Detail,
    Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub tag_list: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    /// Favoriting is not implemented; always `false`.
    pub favorited: bool,
    /// Favoriting is not implemented; always `0`.
    pub favorites_count: u64,
    pub author: ProfileDto,
}

impl ArticleDto {
    pub fn from_record(record: ArticleRecord, following: bool, shape: ArticleShape) -> Self {
        let ArticleRecord { article, author } = record;
        let body = match shape {
            ArticleShape::Detail => Some(article.body.into()),
            ArticleShape::Summary => None,
        };

        Self {
            slug: article.slug.into(),
            title: article.title.into(),
            description: article.description.into(),
            body,
            tag_list: article.tag_list.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: false,
            favorites_count: 0,
            author: ProfileDto::from_profile(author, following),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedArticleDto {
    pub message: String,
    pub deleted_slug: String,
}
