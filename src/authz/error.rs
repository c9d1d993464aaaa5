//! Authorization errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthzError {
    /// The permission text could not be parsed into at least one usable part.
    #[error("Invalid permission string: {0}")]
    InvalidPermissionString(String),
}

impl AuthzError {
    pub fn invalid_permission(reason: impl Into<String>) -> Self {
        Self::InvalidPermissionString(reason.into())
    }
}
