// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use conduit_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use conduit_core::domain::user::UserId;

use super::time::fixed_now;

/* -------------------------------- TokenManager -------------------------------- */

/// Tokens are `token:{id}:{username}`; anything else is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

pub fn token_for(id: UserId, username: &str) -> String {
    format!("token:{}:{username}", id.0)
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id, &subject.username),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let mut parts = token.splitn(3, ':');
        let (Some("token"), Some(id), Some(username)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ApplicationError::unauthorized("invalid token"));
        };
        let id = id
            .parse::<i64>()
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;

        let now = fixed_now();
        Ok(AuthenticatedUser {
            id: UserId(id),
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Reversible "hash" so tests can check verification without Argon2 cost.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
