// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserRequest<T> {
    pub user: T,
}

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserBody {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UserRequest<RegisterBody>>,
) -> HttpResult<(StatusCode, Json<UserResponse>)> {
    let RegisterBody {
        email,
        username,
        password,
    } = payload.user;

    let user = state
        .services
        .user_commands
        .register(RegisterUserCommand {
            email,
            username,
            password,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UserRequest<LoginBody>>,
) -> HttpResult<Json<UserResponse>> {
    let LoginBody { email, password } = payload.user;

    let user = state
        .services
        .user_commands
        .login(LoginUserCommand { email, password })
        .await
        .into_http()?;

    Ok(Json(UserResponse { user }))
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated { user, token }: Authenticated,
) -> HttpResult<Json<UserResponse>> {
    let user = state
        .services
        .user_queries
        .current_user(&user, Some(token))
        .await
        .into_http()?;

    Ok(Json(UserResponse { user }))
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Json(payload): Json<UserRequest<UpdateUserBody>>,
) -> HttpResult<Json<UserResponse>> {
    let UpdateUserBody {
        email,
        username,
        password,
        bio,
        image,
    } = payload.user;

    let command = UpdateUserCommand {
        email,
        username,
        password,
        bio,
        image,
    };

    let user = state
        .services
        .user_commands
        .update_user(&user, command)
        .await
        .into_http()?;

    Ok(Json(UserResponse { user }))
}
