use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        member::entities::Member,
        search::{
            pagination::paginate_with_deferred_count,
            ports::MemberSearchRepository,
            value_objects::{
                CountStrategy, MemberLookup, MemberSearchCondition, MemberTeamDto, OffsetLimit,
                Paginated, SearchOptions,
            },
        },
    },
    entity::members,
    infrastructure::search::{predicates::lookup_filter, query::MemberTeamQuery},
};

#[derive(Debug, Clone)]
pub struct SqlMemberSearchRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SqlMemberSearchRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl MemberSearchRepository for SqlMemberSearchRepository {
    async fn search(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        let rows = MemberTeamQuery::from_condition(&condition, options)
            .fetch_all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to search members: {}", e);
                CoreError::Database(e)
            })?;

        Ok(rows.into_iter().map(MemberTeamDto::from).collect())
    }

    async fn search_page_with_total(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
        options: SearchOptions,
    ) -> Result<Paginated<MemberTeamDto>, CoreError> {
        let query = MemberTeamQuery::from_condition(&condition, options).paged(&page);

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::Database(e)
        })?;

        let (rows, total) = query.fetch_with_total(&txn).await.map_err(|e| {
            error!("Failed to search member page: {}", e);
            CoreError::Database(e)
        })?;

        // An empty page carries no window column to read the total from.
        let count = match total {
            Some(total) => total,
            None => query.fetch_count(&txn).await.map_err(|e| {
                error!("Failed to count members: {}", e);
                CoreError::Database(e)
            })?,
        };

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::Database(e)
        })?;

        let page = Paginated {
            items: rows,
            offset: page.offset,
            limit: page.limit,
            count: count as i64,
        };

        Ok(page.map(MemberTeamDto::from))
    }

    async fn search_page(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
        options: SearchOptions,
        strategy: CountStrategy,
    ) -> Result<Paginated<MemberTeamDto>, CoreError> {
        let query = MemberTeamQuery::from_condition(&condition, options).paged(&page);

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::Database(e)
        })?;

        let items: Vec<MemberTeamDto> = query
            .fetch_all(&txn)
            .await
            .map_err(|e| {
                error!("Failed to search member page: {}", e);
                CoreError::Database(e)
            })?
            .into_iter()
            .map(MemberTeamDto::from)
            .collect();

        let (query_ref, txn_ref) = (&query, &txn);
        let count = move || async move {
            query_ref.fetch_count(txn_ref).await.map_err(|e| {
                error!("Failed to count members: {}", e);
                CoreError::Database(e)
            })
        };

        let result = match strategy {
            CountStrategy::Always => {
                let total = count().await?;
                Paginated {
                    items,
                    offset: page.offset,
                    limit: page.limit,
                    count: total as i64,
                }
            }
            CountStrategy::WhenNeeded => paginate_with_deferred_count(items, &page, count).await?,
        };

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::Database(e)
        })?;

        Ok(result)
    }

    async fn count(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> Result<u64, CoreError> {
        MemberTeamQuery::from_condition(&condition, options)
            .fetch_count(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to count members: {}", e);
                CoreError::Database(e)
            })
    }

    async fn find_members(&self, lookup: MemberLookup) -> Result<Vec<Member>, CoreError> {
        let members = members::Entity::find()
            .filter(lookup_filter(&lookup))
            .order_by_asc(members::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to find members: {}", e);
                CoreError::Database(e)
            })?;

        Ok(members.into_iter().map(Member::from).collect())
    }
}
