use sea_orm::entity::prelude::*;

/// Global privilege grants, e.g. `topics:create` or `moderator`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_privileges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub privilege: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
