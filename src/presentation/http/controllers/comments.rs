// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{AddCommentCommand, DeleteCommentCommand},
    dto::{CommentDto, DeletedCommentDto},
    projection::Viewer,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: NewCommentBody,
}

#[derive(Debug, Deserialize)]
pub struct NewCommentBody {
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentsResponse>> {
    let comments = state
        .services
        .comment_queries
        .list_comments(&Viewer::from_actor(actor.user()), &slug)
        .await
        .into_http()?;

    Ok(Json(CommentsResponse { comments }))
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = AddCommentCommand {
        slug,
        body: payload.comment.body,
    };

    let comment = state
        .services
        .comment_commands
        .add_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path((slug, comment_id)): Path<(String, i64)>,
) -> HttpResult<Json<DeletedCommentDto>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { slug, comment_id })
        .await
        .into_http()?;

    Ok(Json(DeletedCommentDto {
        message: "Comment deleted successfully".into(),
        deleted_comment_id: comment_id,
    }))
}
