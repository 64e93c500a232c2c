// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList,
};
use crate::domain::user::{AuthorProfile, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// A rename only happens when the incoming title differs from the stored one.
    pub fn needs_rename(&self, title: &ArticleTitle) -> bool {
        self.title != *title
    }
}

/// An article joined with its author's public profile.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub author: AuthorProfile,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub tag_list: Option<TagList>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            body: None,
            tag_list: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_tag_list(mut self, tag_list: TagList) -> Self {
        self.tag_list = Some(tag_list);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.body.is_none()
            && self.tag_list.is_none()
    }
}

/// Which articles a listing should consider, before tag filtering and paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub authors: Option<Vec<UserId>>,
}

impl ArticleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_author(author_id: UserId) -> Self {
        Self {
            authors: Some(vec![author_id]),
        }
    }

    pub fn by_authors(author_ids: Vec<UserId>) -> Self {
        Self {
            authors: Some(author_ids),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match &self.authors {
            Some(ids) => ids.contains(&article.author_id),
            None => true,
        }
    }
}
