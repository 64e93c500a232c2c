// src/application/queries/users/mod.rs
mod current;

use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Read side of the caller's own account.
pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
