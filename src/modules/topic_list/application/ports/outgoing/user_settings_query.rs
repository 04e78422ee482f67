use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic_list::application::domain::UserSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserSettingsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserSettingsQuery: Send + Sync {
    /// Guests and users without stored preferences get the site defaults.
    async fn get_settings(&self, uid: UserId) -> Result<UserSettings, UserSettingsQueryError>;
}
