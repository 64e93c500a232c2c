// tests/support/mocks/store.rs
use async_trait::async_trait;
use conduit_core::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord, ArticleSlug,
        ArticleUpdate, ArticleWriteRepository, NewArticle,
    },
    comment::{Comment, CommentId, CommentRecord, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    follow::{FollowEdge, FollowRepository},
    pagination::PageRequest,
    user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username},
};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How many times each storage lookup the projector cares about was issued.
#[derive(Debug, Default)]
pub struct QueryCounters {
    pub follow_exists: AtomicUsize,
    pub followed_among: AtomicUsize,
    pub followees_of: AtomicUsize,
    pub article_list: AtomicUsize,
    pub article_count: AtomicUsize,
    pub find_by_slug: AtomicUsize,
}

impl QueryCounters {
    pub fn follow_lookups(&self) -> usize {
        self.follow_exists.load(Ordering::SeqCst) + self.followed_among.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        for counter in [
            &self.follow_exists,
            &self.followed_among,
            &self.followees_of,
            &self.article_list,
            &self.article_count,
            &self.find_by_slug,
        ] {
            counter.store(0, Ordering::SeqCst);
        }
    }
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    follows: HashSet<(UserId, UserId)>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_user_id: i64,
    next_article_id: i64,
    next_comment_id: i64,
}

impl State {
    fn author_of(&self, author_id: UserId) -> DomainResult<User> {
        self.users
            .iter()
            .find(|user| user.id == author_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("author not found".into()))
    }

    fn record(&self, article: &Article) -> DomainResult<ArticleRecord> {
        Ok(ArticleRecord {
            article: article.clone(),
            author: self.author_of(article.author_id)?.profile(),
        })
    }

    fn slug_taken(&self, slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        self.articles
            .iter()
            .any(|article| article.slug == *slug && Some(article.id) != except)
    }

    /// Newest first, ties broken by id descending.
    fn matching(&self, filter: &ArticleFilter) -> Vec<&Article> {
        let mut found: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| filter.matches(article))
            .collect();
        found.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        found
    }
}

/// One in-memory database backing every repository trait, mirroring the
/// unique constraints of the Postgres schema.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    pub counters: QueryCounters,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article_slugs(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .map(|article| article.slug.as_str().to_string())
            .collect()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn is_following(&self, follower: UserId, followee: UserId) -> bool {
        self.state
            .lock()
            .unwrap()
            .follows
            .contains(&(follower, followee))
    }

    pub fn insert_user(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state
            .users
            .iter()
            .any(|user| user.email == new_user.email || user.username == new_user.username)
        {
            return Err(DomainError::Conflict("email or username already exists".into()));
        }
        state.next_user_id += 1;
        let user = User {
            id: UserId(state.next_user_id),
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    pub fn insert_article(&self, new_article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.slug_taken(&new_article.slug, None) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                new_article.slug
            )));
        }
        state.author_of(new_article.author_id)?;
        state.next_article_id += 1;
        let article = Article {
            id: ArticleId(state.next_article_id),
            slug: new_article.slug,
            title: new_article.title,
            description: new_article.description,
            body: new_article.body,
            tag_list: new_article.tag_list,
            author_id: new_article.author_id,
            created_at: new_article.created_at,
            updated_at: new_article.updated_at,
        };
        state.articles.push(article.clone());
        Ok(article)
    }

    pub fn insert_follow(&self, edge: FollowEdge) {
        self.state
            .lock()
            .unwrap()
            .follows
            .insert((edge.follower_id, edge.followee_id));
    }
}

/* -------------------------------- users -------------------------------- */

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.insert_user(new_user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let clash = state.users.iter().any(|user| {
            user.id != update.id
                && (update.email.as_ref() == Some(&user.email)
                    || update.username.as_ref() == Some(&user.username))
        });
        if clash {
            return Err(DomainError::Conflict("email or username already exists".into()));
        }

        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(image) = update.image {
            user.image = Some(image);
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.email == *email).cloned())
    }
}

/* -------------------------------- follows -------------------------------- */

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn follow(&self, edge: FollowEdge) -> DomainResult<()> {
        self.insert_follow(edge);
        Ok(())
    }

    async fn unfollow(&self, edge: FollowEdge) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .follows
            .remove(&(edge.follower_id, edge.followee_id));
        Ok(())
    }

    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool> {
        self.counters.follow_exists.fetch_add(1, Ordering::SeqCst);
        Ok(self.is_following(edge.follower_id, edge.followee_id))
    }

    async fn followees_of(&self, follower: UserId) -> DomainResult<Vec<UserId>> {
        self.counters.followees_of.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        let mut ids: Vec<UserId> = state
            .follows
            .iter()
            .filter(|(from, _)| *from == follower)
            .map(|(_, to)| *to)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn followed_among(
        &self,
        follower: UserId,
        candidates: &[UserId],
    ) -> DomainResult<HashSet<UserId>> {
        self.counters.followed_among.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(candidates
            .iter()
            .copied()
            .filter(|id| state.follows.contains(&(follower, *id)))
            .collect())
    }
}

/* -------------------------------- articles -------------------------------- */

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.insert_article(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state.slug_taken(slug, Some(update.id)) {
                return Err(DomainError::Conflict(format!("slug '{slug}' already exists")));
            }
        }

        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(description) = update.description {
            article.description = description;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(tag_list) = update.tag_list {
            article.tag_list = tag_list;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|article| article.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|comment| comment.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>> {
        self.counters.find_by_slug.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|article| article.slug == *slug)
            .map(|article| state.record(article))
            .transpose()
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: Option<PageRequest>,
    ) -> DomainResult<Vec<ArticleRecord>> {
        self.counters.article_list.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        let records = state
            .matching(filter)
            .into_iter()
            .map(|article| state.record(article))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(match page {
            Some(page) => page.slice(records),
            None => records,
        })
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        self.counters.article_count.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state.matching(filter).len() as u64)
    }
}

/* -------------------------------- comments -------------------------------- */

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state
            .articles
            .iter()
            .any(|article| article.id == comment.article_id)
        {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.next_comment_id += 1;
        let comment = Comment {
            id: CommentId(state.next_comment_id),
            article_id: comment.article_id,
            author_id: comment.author_id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentRecord>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        comments
            .into_iter()
            .map(|comment| -> DomainResult<CommentRecord> {
                Ok(CommentRecord {
                    comment: comment.clone(),
                    author: state.author_of(comment.author_id)?.profile(),
                })
            })
            .collect()
    }

    async fn find_in_article(
        &self,
        article_id: ArticleId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|comment| comment.id == id && comment.article_id == article_id)
            .cloned())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .comments
            .retain(|comment| comment.id != id);
        Ok(())
    }
}
