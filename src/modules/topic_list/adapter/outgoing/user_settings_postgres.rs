use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::topic_list::adapter::outgoing::sea_orm_entity::user_settings::Entity;
use crate::topic_list::application::domain::UserSettings;
use crate::topic_list::application::ports::outgoing::{UserSettingsQuery, UserSettingsQueryError};

#[derive(Clone)]
pub struct UserSettingsPostgres {
    db: Arc<DatabaseConnection>,
    default_topics_per_page: u32,
    max_topics_per_page: u32,
}

impl UserSettingsPostgres {
    pub fn new(
        db: Arc<DatabaseConnection>,
        default_topics_per_page: u32,
        max_topics_per_page: u32,
    ) -> Self {
        Self {
            db,
            default_topics_per_page,
            max_topics_per_page: max_topics_per_page.max(1),
        }
    }

    fn settings_for(&self, stored: Option<i32>) -> UserSettings {
        let per_page = stored
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value > 0)
            .unwrap_or(self.default_topics_per_page);

        UserSettings::new(per_page.clamp(1, self.max_topics_per_page))
    }
}

#[async_trait]
impl UserSettingsQuery for UserSettingsPostgres {
    async fn get_settings(&self, uid: UserId) -> Result<UserSettings, UserSettingsQueryError> {
        if uid.is_guest() {
            return Ok(self.settings_for(None));
        }

        let row = Entity::find_by_id(uid.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(self.settings_for(row.and_then(|row| row.topics_per_page)))
    }
}

fn map_db_err(e: DbErr) -> UserSettingsQueryError {
    tracing::error!("User settings query failed: {}", e);
    UserSettingsQueryError::DatabaseError(e.to_string())
}
