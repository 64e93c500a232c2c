use std::sync::Arc;

use crate::application::dto::{ArticleDto, ArticleShape};
use crate::application::error::ApplicationResult;
use crate::domain::article::ArticleRecord;

use super::{FollowMap, RelationshipResolver, Viewer};

pub struct ArticleProjector {
    relations: Arc<RelationshipResolver>,
}

impl ArticleProjector {
    pub fn new(relations: Arc<RelationshipResolver>) -> Self {
        Self { relations }
    }

    /// Shape a batch for `viewer`, resolving follow state for all distinct
    /// authors up front.
    pub async fn project(
        &self,
        records: Vec<ArticleRecord>,
        viewer: &Viewer,
        shape: ArticleShape,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let follows = self
            .relations
            .follow_map(viewer, records.iter().map(|record| record.author.id))
            .await?;
        Ok(Self::project_with(records, &follows, shape))
    }

    pub async fn project_one(
        &self,
        record: ArticleRecord,
        viewer: &Viewer,
    ) -> ApplicationResult<ArticleDto> {
        let following = self
            .relations
            .is_following(viewer, record.author.id)
            .await?;
        Ok(ArticleDto::from_record(record, following, ArticleShape::Detail))
    }

    /// Shape a batch with follow state the caller already knows.
    pub fn project_with(
        records: Vec<ArticleRecord>,
        follows: &FollowMap,
        shape: ArticleShape,
    ) -> Vec<ArticleDto> {
        records
            .into_iter()
            .map(|record| {
                let following = follows.is_following(record.author.id);
                ArticleDto::from_record(record, following, shape)
            })
            .collect()
    }
}
