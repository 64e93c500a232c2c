mod feed;
mod get_by_slug;
mod list;
mod service;

pub use feed::FeedQuery;
pub use get_by_slug::{GetArticleBySlugQuery, load_article_by_slug};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
