use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::topic_list::adapter::outgoing::sea_orm_entity::{
    topic_reads, topic_tags, topic_watchers,
    topics::{self, Column, Entity},
};
use crate::topic_list::application::domain::{TopicFilter, TopicQuery, TopicSort};
use crate::topic_list::application::ports::outgoing::{
    SortedTopicProvider, SortedTopicProviderError, SortedTopics, TopicSummary,
};

// ============================================================================
// Provider Implementation
// ============================================================================

/// Topic listing backed by plain `ORDER BY` over the `topics` table.
#[derive(Clone)]
pub struct SortedTopicsPostgres {
    db: Arc<DatabaseConnection>,
}

impl SortedTopicsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn tags_for(
        &self,
        tids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<String>>, SortedTopicProviderError> {
        if tids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = topic_tags::Entity::find()
            .filter(topic_tags::Column::Tid.is_in(tids))
            .order_by_asc(topic_tags::Column::Tag)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            tags.entry(row.tid).or_default().push(row.tag);
        }
        Ok(tags)
    }
}

#[async_trait]
impl SortedTopicProvider for SortedTopicsPostgres {
    async fn get_sorted_topics(
        &self,
        query: TopicQuery,
    ) -> Result<SortedTopics, SortedTopicProviderError> {
        let select = apply_order(filtered_topics(&query), &query);

        let topic_count = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let rows = select
            .offset(query.start)
            .limit(query.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut tags = self.tags_for(rows.iter().map(|row| row.tid).collect()).await?;

        let topics = rows
            .into_iter()
            .map(|row| {
                let row_tags = tags.remove(&row.tid).unwrap_or_default();
                model_to_summary(row, row_tags)
            })
            .collect();

        Ok(SortedTopics {
            topic_count,
            topics,
            next_start: query.stop + 1,
        })
    }
}

// ============================================================================
// Query construction
// ============================================================================

fn filtered_topics(query: &TopicQuery) -> Select<Entity> {
    let mut select = Entity::find().filter(Column::Deleted.eq(false));

    if !query.cids.is_empty() {
        select = select.filter(Column::Cid.is_in(query.cids.clone()));
    }

    if !query.tags.is_empty() {
        select = select.filter(
            Column::Tid.in_subquery(
                Query::select()
                    .column(topic_tags::Column::Tid)
                    .from(topic_tags::Entity)
                    .and_where(topic_tags::Column::Tag.is_in(query.tags.clone()))
                    .to_owned(),
            ),
        );
    }

    if let Some(span) = query.term.span() {
        select = select.filter(Column::LastPostedAt.gte(Utc::now() - span));
    }

    let uid = query.uid.value();
    match &query.filter {
        TopicFilter::All => {}
        TopicFilter::New => {
            select = select.filter(
                Column::Tid.not_in_subquery(
                    Query::select()
                        .column(topic_reads::Column::Tid)
                        .from(topic_reads::Entity)
                        .and_where(topic_reads::Column::Uid.eq(uid))
                        .to_owned(),
                ),
            );
        }
        TopicFilter::Watched => {
            select = select.filter(
                Column::Tid.in_subquery(
                    Query::select()
                        .column(topic_watchers::Column::Tid)
                        .from(topic_watchers::Entity)
                        .and_where(topic_watchers::Column::Uid.eq(uid))
                        .to_owned(),
                ),
            );
        }
        TopicFilter::Unreplied => {
            select = select.filter(Column::PostCount.lte(1));
        }
        TopicFilter::Unrecognized(raw) => {
            tracing::debug!("Ignoring unrecognized topic filter {:?}", raw);
        }
    }

    select
}

fn apply_order(select: Select<Entity>, query: &TopicQuery) -> Select<Entity> {
    let select = if query.floats_pinned() {
        select.order_by_desc(Column::Pinned)
    } else {
        select
    };

    let select = match query.sort {
        TopicSort::Recent => select.order_by_desc(Column::LastPostedAt),
        TopicSort::Old => select.order_by_asc(Column::LastPostedAt),
        TopicSort::Create => select.order_by_desc(Column::CreatedAt),
        TopicSort::Posts => select.order_by_desc(Column::PostCount),
        TopicSort::Votes => select.order_by_desc(Column::Votes),
        TopicSort::Views => select.order_by_desc(Column::ViewCount),
    };

    select.order_by_desc(Column::Tid)
}

fn model_to_summary(model: topics::Model, tags: Vec<String>) -> TopicSummary {
    TopicSummary {
        tid: model.tid,
        cid: model.cid,
        uid: model.uid,
        title: model.title,
        slug: model.slug,
        post_count: model.post_count,
        view_count: model.view_count,
        votes: model.votes,
        pinned: model.pinned,
        tags,
        created_at: model.created_at.with_timezone(&Utc),
        last_posted_at: model.last_posted_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> SortedTopicProviderError {
    tracing::error!("Sorted topic query failed: {}", e);
    SortedTopicProviderError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
