// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::FollowCommand, dto::ProfileDto, projection::Viewer,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_queries
        .get_profile(&Viewer::from_actor(actor.user()), &username)
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { profile }))
}

pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_commands
        .follow(&user, FollowCommand { username })
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { profile }))
}

pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_commands
        .unfollow(&user, FollowCommand { username })
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { profile }))
}
