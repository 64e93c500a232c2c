use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::ApplicationResult,
    },
    domain::follow::FollowEdge,
};

pub struct FollowCommand {
    pub username: String,
}

impl ProfileCommandService {
    /// Idempotent: following twice leaves a single edge.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        command: FollowCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.load_target(&command.username).await?;
        let edge = FollowEdge::new(actor.id, target.id)?;

        self.follow_repo.follow(edge).await?;
        tracing::info!(follower = actor.id.0, followee = target.id.0, "user followed");

        Ok(ProfileDto::from_profile(target.profile(), true))
    }

    /// Removing an edge that does not exist succeeds.
    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        command: FollowCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.load_target(&command.username).await?;
        let edge = FollowEdge::new(actor.id, target.id)?;

        self.follow_repo.unfollow(edge).await?;
        tracing::info!(follower = actor.id.0, followee = target.id.0, "user unfollowed");

        Ok(ProfileDto::from_profile(target.profile(), false))
    }
}
