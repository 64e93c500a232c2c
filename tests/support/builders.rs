// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use conduit_core::application::ports::util::SlugGenerator;
use conduit_core::domain::{
    article::{
        Article, ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, NewArticle, TagList,
    },
    follow::FollowEdge,
    user::{Email, NewUser, PasswordHash, User, Username},
};
use conduit_core::infrastructure::util::TitleSlugGenerator;

use super::mocks::{InMemoryStore, fixed_now};

pub const TEST_PASSWORD: &str = "correct horse";

/// Seed a user whose password is [`TEST_PASSWORD`] under the dummy hasher.
pub fn seed_user(store: &InMemoryStore, username: &str) -> User {
    store
        .insert_user(NewUser {
            email: Email::new(format!("{username}@example.com")).unwrap(),
            username: Username::new(username).unwrap(),
            password_hash: PasswordHash::new(format!("hashed:{TEST_PASSWORD}")).unwrap(),
            created_at: fixed_now(),
        })
        .unwrap()
}

pub fn seed_follow(store: &InMemoryStore, follower: &User, followee: &User) {
    store.insert_follow(FollowEdge::new(follower.id, followee.id).unwrap());
}

/// Article fixture written straight to the store, bypassing the slug manager.
pub struct ArticleSeed {
    title: String,
    slug: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl ArticleSeed {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: None,
            tags: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    /// Offset from [`fixed_now`] in minutes; larger is newer.
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn by(self, store: &InMemoryStore, author: &User) -> Article {
        let slug = self
            .slug
            .unwrap_or_else(|| TitleSlugGenerator.slugify(&self.title));
        store
            .insert_article(NewArticle {
                slug: ArticleSlug::new(slug).unwrap(),
                title: ArticleTitle::new(self.title.as_str()).unwrap(),
                description: ArticleDescription::new(format!("about {}", self.title)).unwrap(),
                body: ArticleBody::new(format!("body of {}", self.title)).unwrap(),
                tag_list: TagList::new(self.tags),
                author_id: author.id,
                created_at: self.created_at,
                updated_at: self.created_at,
            })
            .unwrap()
    }
}
