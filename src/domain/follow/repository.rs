use crate::domain::errors::DomainResult;
use crate::domain::follow::FollowEdge;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Upsert: following an already-followed user is a no-op.
    async fn follow(&self, edge: FollowEdge) -> DomainResult<()>;

    /// Removing a missing edge is a no-op.
    async fn unfollow(&self, edge: FollowEdge) -> DomainResult<()>;

    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool>;

    /// Every user `follower` follows.
    async fn followees_of(&self, follower: UserId) -> DomainResult<Vec<UserId>>;

    /// The subset of `candidates` that `follower` follows, in one round trip.
    async fn followed_among(
        &self,
        follower: UserId,
        candidates: &[UserId],
    ) -> DomainResult<HashSet<UserId>>;
}
