// src/domain/follow/mod.rs
pub mod repository;

pub use repository::FollowRepository;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

/// Directed relation: `follower_id` follows `followee_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    pub follower_id: UserId,
    pub followee_id: UserId,
}

impl FollowEdge {
    pub fn new(follower_id: UserId, followee_id: UserId) -> DomainResult<Self> {
        if follower_id == followee_id {
            return Err(DomainError::Validation("cannot follow yourself".into()));
        }
        Ok(Self {
            follower_id,
            followee_id,
        })
    }
}
