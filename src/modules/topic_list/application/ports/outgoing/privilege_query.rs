use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrivilegeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PrivilegeQuery: Send + Sync {
    async fn can_create_topics(&self, uid: UserId) -> Result<bool, PrivilegeQueryError>;

    /// Administrators and moderators.
    async fn is_privileged(&self, uid: UserId) -> Result<bool, PrivilegeQueryError>;
}
