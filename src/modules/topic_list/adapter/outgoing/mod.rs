pub mod category_query_postgres;
pub mod feed_token_redis;
pub mod privilege_query_postgres;
pub mod sea_orm_entity;
pub mod sorted_topics_postgres;
pub mod user_settings_postgres;

pub use category_query_postgres::CategoryQueryPostgres;
pub use feed_token_redis::FeedTokenRedis;
pub use privilege_query_postgres::PrivilegeQueryPostgres;
pub use sorted_topics_postgres::SortedTopicsPostgres;
pub use user_settings_postgres::UserSettingsPostgres;
