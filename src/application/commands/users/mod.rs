mod login;
mod password;
mod register;
mod service;
mod update;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
