pub mod articles;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod profiles;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, ArticleShape, DeletedArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::{CommentDto, DeletedCommentDto};
pub use pagination::ArticlePage;
pub use profiles::ProfileDto;
pub use users::UserDto;
