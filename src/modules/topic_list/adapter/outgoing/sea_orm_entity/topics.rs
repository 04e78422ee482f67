use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: i64,

    pub cid: i64,
    pub uid: i64,
    pub title: String,
    pub slug: String,
    pub post_count: i64,
    pub view_count: i64,
    pub votes: i64,
    pub pinned: bool,
    pub deleted: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub last_posted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::topic_tags::Entity")]
    TopicTags,
}

impl Related<super::topic_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TopicTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
