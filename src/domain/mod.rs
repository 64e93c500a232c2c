pub mod article;
pub mod comment;
pub mod errors;
pub mod follow;
pub mod pagination;
pub mod user;
