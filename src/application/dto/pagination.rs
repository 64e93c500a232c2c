use serde::{Deserialize, Serialize};

use super::ArticleDto;

/// One page of a listing. `articles_count` is the total after filtering and
/// before the offset/limit window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub articles: Vec<ArticleDto>,
    pub articles_count: u64,
}

impl ArticlePage {
    pub fn new(articles: Vec<ArticleDto>, articles_count: u64) -> Self {
        Self {
            articles,
            articles_count,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }
}
