// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod profiles;
pub mod users;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::pagination::PageRequest;

/// Query-string window. Signed so negative input is reported as a validation
/// error rather than a parse failure.
#[derive(Debug, Default, serde::Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageParams {
    pub fn to_page(&self) -> ApplicationResult<PageRequest> {
        let limit = self
            .limit
            .map(|limit| {
                u32::try_from(limit)
                    .map_err(|_| ApplicationError::validation("limit must be between 1 and 100"))
            })
            .transpose()?;
        let offset = self
            .offset
            .map(|offset| {
                if offset < 0 {
                    return Err(ApplicationError::validation("offset must be zero or greater"));
                }
                u32::try_from(offset).map_err(|_| {
                    ApplicationError::validation(format!("offset must not exceed {}", u32::MAX))
                })
            })
            .transpose()?;

        Ok(PageRequest::new(limit, offset)?)
    }
}
