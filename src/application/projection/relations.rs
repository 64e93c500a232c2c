use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::follow::{FollowEdge, FollowRepository};
use crate::domain::user::UserId;

use super::Viewer;

/// Local authorId -> following lookup for one batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowMap {
    followed: HashSet<UserId>,
}

impl FollowMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every id maps to `true`; anything else to `false`.
    pub fn from_followed(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            followed: ids.into_iter().collect(),
        }
    }

    pub fn is_following(&self, user_id: UserId) -> bool {
        self.followed.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.followed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followed.is_empty()
    }
}

/// Resolves follow state for a viewer with at most one storage query per batch.
pub struct RelationshipResolver {
    follow_repo: Arc<dyn FollowRepository>,
}

impl RelationshipResolver {
    pub fn new(follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repo }
    }

    /// Anonymous viewers and self-references never hit storage. A single
    /// distinct author costs one edge lookup; more cost one batched lookup.
    pub async fn follow_map<I>(&self, viewer: &Viewer, author_ids: I) -> DomainResult<FollowMap>
    where
        I: IntoIterator<Item = UserId>,
    {
        let Some(viewer_id) = viewer.user_id() else {
            return Ok(FollowMap::empty());
        };

        let mut candidates: Vec<UserId> = author_ids
            .into_iter()
            .filter(|id| *id != viewer_id)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        match candidates.as_slice() {
            [] => Ok(FollowMap::empty()),
            [only] => {
                let edge = FollowEdge::new(viewer_id, *only)?;
                if self.follow_repo.exists(edge).await? {
                    Ok(FollowMap::from_followed([*only]))
                } else {
                    Ok(FollowMap::empty())
                }
            }
            many => {
                let followed = self.follow_repo.followed_among(viewer_id, many).await?;
                Ok(FollowMap::from_followed(followed))
            }
        }
    }

    pub async fn is_following(&self, viewer: &Viewer, user_id: UserId) -> DomainResult<bool> {
        Ok(self
            .follow_map(viewer, [user_id])
            .await?
            .is_following(user_id))
    }
}
