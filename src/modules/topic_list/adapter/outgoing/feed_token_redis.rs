use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic_list::application::ports::outgoing::{FeedTokenError, FeedTokenStore};

const RSS_TOKEN_FIELD: &str = "rss_token";

/// Feed tokens kept on the user hash:
///
/// ```text
/// user:{uid} -> { rss_token: "<uuid>" , ... }
/// ```
///
/// A token is minted on first use with `HSETNX`, so concurrent requests for
/// the same user settle on a single value.
#[derive(Clone)]
pub struct FeedTokenRedis {
    pool: Arc<Pool>,
}

impl FeedTokenRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn user_key(uid: UserId) -> String {
        format!("user:{uid}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, FeedTokenError> {
        self.pool.get().await.map_err(|e| {
            tracing::error!("Redis pool error: {}", e);
            FeedTokenError::StoreUnavailable(format!("Pool error: {}", e))
        })
    }
}

#[async_trait]
impl FeedTokenStore for FeedTokenRedis {
    async fn get_or_create_token(&self, uid: UserId) -> Result<Option<String>, FeedTokenError> {
        if uid.is_guest() {
            return Ok(None);
        }

        let key = Self::user_key(uid);
        let mut conn = self.get_conn().await?;

        let existing: Option<String> = conn
            .hget(&key, RSS_TOKEN_FIELD)
            .await
            .map_err(map_redis_err)?;
        if let Some(token) = existing.filter(|token| !token.is_empty()) {
            return Ok(Some(token));
        }

        let candidate = Uuid::new_v4().to_string();
        let _: bool = conn
            .hset_nx(&key, RSS_TOKEN_FIELD, &candidate)
            .await
            .map_err(map_redis_err)?;

        // Whoever won the race owns the field now.
        let token: Option<String> = conn
            .hget(&key, RSS_TOKEN_FIELD)
            .await
            .map_err(map_redis_err)?;

        Ok(Some(token.unwrap_or(candidate)))
    }
}

fn map_redis_err(e: deadpool_redis::redis::RedisError) -> FeedTokenError {
    tracing::error!("Feed token lookup failed: {}", e);
    FeedTokenError::StoreUnavailable(e.to_string())
}
