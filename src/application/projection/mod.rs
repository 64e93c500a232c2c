// src/application/projection/mod.rs
//! Viewer-relative shaping of raw records. Every field that depends on who is
//! asking (today: `following`) is resolved here, once per batch.
mod articles;
mod relations;
mod viewer;

pub use articles::ArticleProjector;
pub use relations::{FollowMap, RelationshipResolver};
pub use viewer::Viewer;
