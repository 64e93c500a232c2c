// src/application/commands/articles/create.rs
use std::sync::Arc;

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        projection::Viewer,
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleRecord, ArticleTitle, NewArticle, TagList,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    body: Option<String>,
    tag_list: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_list.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            body: self.body.ok_or("body is required")?,
            tag_list: self.tag_list,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let body = ArticleBody::new(command.body)?;
        let tag_list = TagList::new(command.tag_list);

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let now = self.clock.now();

        let created = self
            .write_with_unique_slug(&title, None, |slug| {
                let new_article = NewArticle {
                    slug,
                    title: title.clone(),
                    description: description.clone(),
                    body: body.clone(),
                    tag_list: tag_list.clone(),
                    author_id: author.id,
                    created_at: now,
                    updated_at: now,
                };
                let repo = Arc::clone(&self.write_repo);
                async move { repo.insert(new_article).await }
            })
            .await?;

        tracing::info!(article_id = created.id.0, slug = %created.slug, "article created");

        let record = ArticleRecord {
            article: created,
            author: author.profile(),
        };
        self.projector.project_one(record, &Viewer::from(actor)).await
    }
}
