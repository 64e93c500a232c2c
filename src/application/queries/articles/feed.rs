use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticlePage, ArticleShape, AuthenticatedUser},
        error::ApplicationResult,
        projection::{ArticleProjector, FollowMap},
    },
    domain::{article::ArticleFilter, pagination::PageRequest},
};

#[derive(Debug, Default)]
pub struct FeedQuery {
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// Articles by authors `actor` follows. Every author in the feed is
    /// followed, so the follow set doubles as the projection map.
    pub async fn feed(
        &self,
        actor: &AuthenticatedUser,
        query: FeedQuery,
    ) -> ApplicationResult<ArticlePage> {
        let followees = self.follow_repo.followees_of(actor.id).await?;
        if followees.is_empty() {
            return Ok(ArticlePage::empty());
        }

        let follows = FollowMap::from_followed(followees.iter().copied());
        let filter = ArticleFilter::by_authors(followees);
        let (records, total) = tokio::try_join!(
            self.read_repo.list(&filter, Some(query.page)),
            self.read_repo.count(&filter),
        )?;

        let articles = ArticleProjector::project_with(records, &follows, ArticleShape::Summary);
        Ok(ArticlePage::new(articles, total))
    }
}
