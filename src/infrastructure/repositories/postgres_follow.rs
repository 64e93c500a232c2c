// src/infrastructure/repositories/postgres_follow.rs
use std::collections::HashSet;

use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::follow::{FollowEdge, FollowRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_user_ids(ids: Vec<i64>) -> DomainResult<Vec<UserId>> {
    ids.into_iter().map(UserId::new).collect()
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn follow(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2)
             ON CONFLICT (follower_id, followee_id) DO NOTHING",
        )
        .bind(i64::from(edge.follower_id))
        .bind(i64::from(edge.followee_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfollow(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(i64::from(edge.follower_id))
            .bind(i64::from(edge.followee_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(i64::from(edge.follower_id))
        .bind(i64::from(edge.followee_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn followees_of(&self, follower: UserId) -> DomainResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT followee_id FROM follows WHERE follower_id = $1 ORDER BY followee_id",
        )
        .bind(i64::from(follower))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        to_user_ids(ids)
    }

    async fn followed_among(
        &self,
        follower: UserId,
        candidates: &[UserId],
    ) -> DomainResult<HashSet<UserId>> {
        if candidates.is_empty() {
            return Ok(HashSet::new());
        }

        let candidate_ids: Vec<i64> = candidates.iter().copied().map(i64::from).collect();
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT followee_id FROM follows WHERE follower_id = $1 AND followee_id = ANY($2)",
        )
        .bind(i64::from(follower))
        .bind(candidate_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(to_user_ids(ids)?.into_iter().collect())
    }
}
