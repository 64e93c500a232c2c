use std::sync::Arc;

use super::{ArticleCommandService, service::ensure_can_modify};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        projection::Viewer,
        queries::articles::load_article_by_slug,
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleRecord, ArticleTitle, ArticleUpdate, TagList,
    },
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let existing = load_article_by_slug(self.read_repo.as_ref(), &command.slug).await?;
        ensure_can_modify(actor, &existing.article, "update")?;

        let UpdateArticleCommand {
            slug: _,
            title,
            description,
            body,
            tag_list,
        } = command;

        let title_opt = title.map(ArticleTitle::new).transpose()?;
        let description_opt = description.map(ArticleDescription::new).transpose()?;
        let body_opt = body.map(ArticleBody::new).transpose()?;

        let mut update = ArticleUpdate::new(existing.article.id, self.clock.now());
        if let Some(description) = description_opt {
            update = update.with_description(description);
        }
        if let Some(body) = body_opt {
            update = update.with_body(body);
        }
        if let Some(tags) = tag_list {
            update = update.with_tag_list(TagList::new(tags));
        }

        // Same title: no slug recomputation and no conflict check.
        let rename = title_opt.filter(|title| existing.article.needs_rename(title));

        let updated = match rename {
            Some(title) => {
                let update = update.with_title(title.clone());
                self.write_with_unique_slug(&title, Some(existing.article.id), |slug| {
                    let update = update.clone().with_slug(slug);
                    let repo = Arc::clone(&self.write_repo);
                    async move { repo.update(update).await }
                })
                .await?
            }
            None if update.is_empty() => existing.article,
            None => self.write_repo.update(update).await?,
        };

        let record = ArticleRecord {
            article: updated,
            author: existing.author,
        };
        self.projector.project_one(record, &Viewer::from(actor)).await
    }
}
