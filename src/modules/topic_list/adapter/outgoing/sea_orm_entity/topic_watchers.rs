use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topic_watchers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
