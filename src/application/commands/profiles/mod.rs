mod follow;
mod service;

pub use follow::FollowCommand;
pub use service::ProfileCommandService;
