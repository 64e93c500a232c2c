// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticlePage, DeletedArticleDto},
    projection::Viewer,
    queries::articles::{FeedQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::PageParams;

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRequest<T> {
    pub article: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticleBody {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePage>> {
    let page = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .to_page()
    .into_http()?;

    let query = ListArticlesQuery {
        tag: params.tag,
        author: params.author,
        favorited: params.favorited,
        page,
    };

    state
        .services
        .article_queries
        .list_articles(&Viewer::from_actor(actor.user()), query)
        .await
        .into_http()
        .map(Json)
}

pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ArticlePage>> {
    let query = FeedQuery {
        page: params.to_page().into_http()?,
    };

    state
        .services
        .article_queries
        .feed(&user, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(
            &Viewer::from_actor(actor.user()),
            GetArticleBySlugQuery { slug },
        )
        .await
        .into_http()?;

    Ok(Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Json(payload): Json<ArticleRequest<NewArticleBody>>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let NewArticleBody {
        title,
        description,
        body,
        tag_list,
    } = payload.article;

    let command = CreateArticleCommand {
        title,
        description,
        body,
        tag_list,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<ArticleRequest<ArticleChanges>>,
) -> HttpResult<Json<ArticleResponse>> {
    let ArticleChanges {
        title,
        description,
        body,
        tag_list,
    } = payload.article;

    let command = UpdateArticleCommand {
        slug,
        title,
        description,
        body,
        tag_list,
    };

    let article = state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()?;

    Ok(Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<DeletedArticleDto>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { slug: slug.clone() })
        .await
        .into_http()?;

    Ok(Json(DeletedArticleDto {
        message: "Article deleted successfully".into(),
        deleted_slug: slug,
    }))
}
