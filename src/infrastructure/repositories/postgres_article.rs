// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleRecord, ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
    TagList,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::{AuthorProfile, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "id, slug, title, description, body, tag_list, author_id, created_at, updated_at";

const RECORD_SELECT: &str = "SELECT a.id, a.slug, a.title, a.description, a.body, a.tag_list, \
     a.author_id, a.created_at, a.updated_at, \
     u.username AS author_username, u.bio AS author_bio, u.image AS author_image \
     FROM articles a JOIN users u ON u.id = a.author_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    tag_list: Vec<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            tag_list: TagList::new(row.tag_list),
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleRecordRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
}

impl TryFrom<ArticleRecordRow> for ArticleRecord {
    type Error = DomainError;

    fn try_from(row: ArticleRecordRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(row.article)?;
        let author = AuthorProfile {
            id: article.author_id,
            username: Username::new(row.author_username)?,
            bio: row.author_bio,
            image: row.author_image,
        };
        Ok(ArticleRecord { article, author })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (slug, title, description, body, tag_list, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(tag_list.into_inner())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            description,
            body,
            tag_list,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(String::from(description));
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }

        if let Some(tag_list) = tag_list {
            builder.push(", tag_list = ");
            builder.push_bind(tag_list.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        if let Some(authors) = &filter.authors {
            let ids: Vec<i64> = authors.iter().copied().map(i64::from).collect();
            builder.push(" WHERE a.author_id = ANY(");
            builder.push_bind(ids);
            builder.push(")");
        }
    }

    async fn fetch_one_record(
        &self,
        builder: &mut QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Option<ArticleRecord>> {
        let row = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleRecord::try_from).transpose()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        builder.push(" WHERE a.slug = ");
        builder.push_bind(slug.as_str().to_owned());
        self.fetch_one_record(&mut builder).await
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: Option<PageRequest>,
    ) -> DomainResult<Vec<ArticleRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC");

        if let Some(page) = page {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(page.limit()));
            builder.push(" OFFSET ");
            builder.push_bind(i64::from(page.offset()));
        }

        let rows = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleRecord::try_from).collect()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles a");
        Self::apply_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
