// tests/support/mocks/racing.rs
use async_trait::async_trait;
use conduit_core::domain::{
    article::{
        Article, ArticleBody, ArticleDescription, ArticleId, ArticleTitle, ArticleUpdate,
        ArticleWriteRepository, NewArticle, TagList,
    },
    errors::{DomainError, DomainResult},
    user::UserId,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::store::InMemoryStore;

/// Simulates a concurrent writer: for the first `races` inserts or renames it
/// lets a rival article claim the requested slug just before the write lands,
/// so the write fails on the unique constraint.
pub struct RacingArticleWrite {
    store: Arc<InMemoryStore>,
    rival: UserId,
    races: AtomicUsize,
    pub attempts: AtomicUsize,
}

impl RacingArticleWrite {
    pub fn new(store: Arc<InMemoryStore>, rival: UserId, races: usize) -> Self {
        Self {
            store,
            rival,
            races: AtomicUsize::new(races),
            attempts: AtomicUsize::new(0),
        }
    }

    fn take_race(&self) -> bool {
        self.races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn plant_rival(&self, template: NewArticle) {
        let rival = NewArticle {
            author_id: self.rival,
            ..template
        };
        self.store
            .insert_article(rival)
            .expect("rival article should claim the free slug");
    }

    fn lose_race(&self, template: &NewArticle) -> bool {
        let pending = self.take_race();
        if pending {
            self.plant_rival(template.clone());
        }
        pending
    }

    /// Only slug-changing updates can lose a race.
    fn lose_rename_race(&self, update: &ArticleUpdate) -> bool {
        let Some(slug) = update.slug.clone() else {
            return false;
        };
        let pending = self.take_race();
        if pending {
            let title = update
                .title
                .clone()
                .unwrap_or_else(|| ArticleTitle::new("Rival").unwrap());
            self.plant_rival(NewArticle {
                slug,
                title,
                description: ArticleDescription::new("rival").unwrap(),
                body: ArticleBody::new("rival").unwrap(),
                tag_list: TagList::default(),
                author_id: self.rival,
                created_at: update.updated_at,
                updated_at: update.updated_at,
            });
        }
        pending
    }
}

#[async_trait]
impl ArticleWriteRepository for RacingArticleWrite {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.lose_race(&article) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                article.slug
            )));
        }
        ArticleWriteRepository::insert(self.store.as_ref(), article).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.lose_rename_race(&update) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        ArticleWriteRepository::update(self.store.as_ref(), update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        ArticleWriteRepository::delete(self.store.as_ref(), id).await
    }
}
