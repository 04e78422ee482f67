use sea_orm::entity::prelude::*;

/// A user has read a topic up to its latest post.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topic_reads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: i64,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub read_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
