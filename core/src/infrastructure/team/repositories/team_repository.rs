use std::sync::Arc;

use sea_orm::{
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionTrait, sea_query::Expr,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        team::{
            entities::{Team, TeamAgeStats},
            ports::TeamRepository,
        },
    },
    entity::{members, teams},
    infrastructure::team::mappers::TeamAgeRow,
};

#[derive(Debug, Clone)]
pub struct SqlTeamRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SqlTeamRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TeamRepository for SqlTeamRepository {
    async fn create_team(&self, name: String) -> Result<Team, CoreError> {
        let active_model = teams::ActiveModel {
            id: NotSet,
            name: Set(name),
        };

        let created = teams::Entity::insert(active_model)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to create team: {}", e);
                CoreError::Database(e)
            })?;

        Ok(Team::from(created))
    }

    async fn update_team(&self, team: Team) -> Result<Team, CoreError> {
        let active_model = teams::ActiveModel {
            id: Unchanged(team.id),
            name: Set(team.name),
        };

        let updated = teams::Entity::update(active_model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update team: {}", e);
                    CoreError::Database(e)
                }
            })?;

        Ok(Team::from(updated))
    }

    async fn get_by_id(&self, team_id: i32) -> Result<Option<Team>, CoreError> {
        let team = teams::Entity::find_by_id(team_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get team: {}", e);
                CoreError::Database(e)
            })?;

        Ok(team.map(Team::from))
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>, CoreError> {
        let teams = teams::Entity::find()
            .order_by_asc(teams::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch teams: {}", e);
                CoreError::Database(e)
            })?;

        Ok(teams.into_iter().map(Team::from).collect())
    }

    async fn delete_team(&self, team_id: i32) -> Result<bool, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::Database(e)
        })?;

        members::Entity::update_many()
            .col_expr(members::Column::TeamId, Expr::value(Option::<i32>::None))
            .filter(members::Column::TeamId.eq(team_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to detach members from team: {}", e);
                CoreError::Database(e)
            })?;

        let result = teams::Entity::delete_by_id(team_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete team: {}", e);
                CoreError::Database(e)
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::Database(e)
        })?;

        Ok(result.rows_affected > 0)
    }

    async fn fetch_age_stats(&self) -> Result<Vec<TeamAgeStats>, CoreError> {
        let rows = teams::Entity::find()
            .select_only()
            .column_as(teams::Column::Name, "team_name")
            .column_as(members::Column::Id.count(), "member_count")
            .column_as(members::Column::Age.sum(), "age_sum")
            .join(JoinType::InnerJoin, teams::Relation::Members.def())
            .group_by(teams::Column::Name)
            .order_by_asc(teams::Column::Name)
            .into_model::<TeamAgeRow>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch team age stats: {}", e);
                CoreError::Database(e)
            })?;

        Ok(rows.into_iter().map(TeamAgeStats::from).collect())
    }
}
