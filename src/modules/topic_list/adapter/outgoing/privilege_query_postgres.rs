use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::topic_list::adapter::outgoing::sea_orm_entity::user_privileges::{Column, Entity};
use crate::topic_list::application::ports::outgoing::{PrivilegeQuery, PrivilegeQueryError};

const CREATE_TOPICS: &str = "topics:create";
const PRIVILEGED_ROLES: [&str; 3] = ["admin", "global-moderator", "moderator"];

#[derive(Clone)]
pub struct PrivilegeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PrivilegeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn has_any(&self, uid: UserId, privileges: Vec<&str>) -> Result<bool, PrivilegeQueryError> {
        let grant = Entity::find()
            .filter(Column::Uid.eq(uid.value()))
            .filter(Column::Privilege.is_in(privileges))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(grant.is_some())
    }
}

#[async_trait]
impl PrivilegeQuery for PrivilegeQueryPostgres {
    async fn can_create_topics(&self, uid: UserId) -> Result<bool, PrivilegeQueryError> {
        self.has_any(uid, vec![CREATE_TOPICS]).await
    }

    async fn is_privileged(&self, uid: UserId) -> Result<bool, PrivilegeQueryError> {
        if uid.is_guest() {
            return Ok(false);
        }
        self.has_any(uid, PRIVILEGED_ROLES.to_vec()).await
    }
}

fn map_db_err(e: DbErr) -> PrivilegeQueryError {
    tracing::error!("Privilege query failed: {}", e);
    PrivilegeQueryError::DatabaseError(e.to_string())
}
