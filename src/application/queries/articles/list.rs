use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticlePage, ArticleShape},
        error::ApplicationResult,
        projection::Viewer,
    },
    domain::{article::ArticleFilter, pagination::PageRequest, user::Username},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub page: PageRequest,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        viewer: &Viewer,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticlePage> {
        // Favorites are not tracked, so nothing is favorited by anyone.
        if query.favorited.is_some() {
            return Ok(ArticlePage::empty());
        }

        let filter = match query.author.as_deref() {
            Some(name) => match self.resolve_author(name).await? {
                Some(filter) => filter,
                None => return Ok(ArticlePage::empty()),
            },
            None => ArticleFilter::all(),
        };

        let (records, total) = match query.tag.as_deref() {
            Some(tag) => {
                let matching: Vec<_> = self
                    .read_repo
                    .list(&filter, None)
                    .await?
                    .into_iter()
                    .filter(|record| record.article.tag_list.contains(tag))
                    .collect();
                let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
                (query.page.slice(matching), total)
            }
            None => tokio::try_join!(
                self.read_repo.list(&filter, Some(query.page)),
                self.read_repo.count(&filter),
            )?,
        };

        let articles = self
            .projector
            .project(records, viewer, ArticleShape::Summary)
            .await?;
        Ok(ArticlePage::new(articles, total))
    }

    /// `None` when no such author exists.
    async fn resolve_author(&self, name: &str) -> ApplicationResult<Option<ArticleFilter>> {
        let Ok(username) = Username::new(name) else {
            return Ok(None);
        };
        Ok(self
            .user_repo
            .find_by_username(&username)
            .await?
            .map(|user| ArticleFilter::by_author(user.id)))
    }
}
