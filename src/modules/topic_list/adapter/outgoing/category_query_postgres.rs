use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use std::sync::Arc;

use crate::topic_list::adapter::outgoing::sea_orm_entity::categories::{self, Column, Entity};
use crate::topic_list::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategorySummary,
};

#[derive(Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn get_categories(
        &self,
        cids: Vec<i64>,
    ) -> Result<Vec<CategorySummary>, CategoryQueryError> {
        if cids.is_empty() {
            return Ok(vec![]);
        }

        let rows = Entity::find()
            .filter(Column::Cid.is_in(cids.clone()))
            .filter(Column::Disabled.eq(false))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut by_cid: HashMap<i64, categories::Model> =
            rows.into_iter().map(|row| (row.cid, row)).collect();

        // Requested order, each category once.
        Ok(cids
            .into_iter()
            .filter_map(|cid| by_cid.remove(&cid))
            .map(model_to_summary)
            .collect())
    }
}

fn model_to_summary(model: categories::Model) -> CategorySummary {
    CategorySummary {
        cid: model.cid,
        name: model.name,
        slug: model.slug,
        icon: model.icon,
        bg_color: model.bg_color,
        color: model.color,
    }
}

fn map_db_err(e: DbErr) -> CategoryQueryError {
    tracing::error!("Category query failed: {}", e);
    CategoryQueryError::DatabaseError(e.to_string())
}
