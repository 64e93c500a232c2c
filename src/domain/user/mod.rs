// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{AuthorProfile, NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, UserId, Username};
