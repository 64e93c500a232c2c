// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{CanDeleteCommentSpec, Comment, CommentBody, CommentId, CommentRecord, NewComment};
pub use repository::CommentRepository;
