use std::sync::Arc;

use sea_orm::{
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use tracing::{error, info};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        member::{
            entities::{Member, MemberWithTeam},
            ports::MemberRepository,
            value_objects::CreateMemberInput,
        },
    },
    entity::{members, teams},
};

#[derive(Debug, Clone)]
pub struct SqlMemberRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SqlMemberRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl MemberRepository for SqlMemberRepository {
    async fn create_member(&self, input: CreateMemberInput) -> Result<Member, CoreError> {
        let active_model = members::ActiveModel {
            id: NotSet,
            username: Set(input.username),
            age: Set(input.age),
            team_id: Set(input.team_id),
        };

        let created = members::Entity::insert(active_model)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to create member: {}", e);
                CoreError::Database(e)
            })?;

        Ok(Member::from(created))
    }

    async fn update_member(&self, member: Member) -> Result<Member, CoreError> {
        let active_model = members::ActiveModel {
            id: Unchanged(member.id),
            username: Set(member.username),
            age: Set(member.age),
            team_id: Set(member.team_id),
        };

        let updated = members::Entity::update(active_model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update member: {}", e);
                    CoreError::Database(e)
                }
            })?;

        Ok(Member::from(updated))
    }

    async fn get_by_id(&self, member_id: i32) -> Result<Option<Member>, CoreError> {
        let member = members::Entity::find_by_id(member_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get member: {}", e);
                CoreError::Database(e)
            })?;

        Ok(member.map(Member::from))
    }

    async fn get_with_team(&self, member_id: i32) -> Result<Option<MemberWithTeam>, CoreError> {
        let row = members::Entity::find_by_id(member_id)
            .find_also_related(teams::Entity)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get member with team: {}", e);
                CoreError::Database(e)
            })?;

        Ok(row.map(MemberWithTeam::from))
    }

    async fn fetch_by_username(&self, username: String) -> Result<Vec<Member>, CoreError> {
        let members = members::Entity::find()
            .filter(members::Column::Username.eq(username))
            .order_by_asc(members::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch members by username: {}", e);
                CoreError::Database(e)
            })?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn fetch_by_team(&self, team_id: i32) -> Result<Vec<Member>, CoreError> {
        let members = members::Entity::find()
            .filter(members::Column::TeamId.eq(team_id))
            .order_by_asc(members::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch members of team: {}", e);
                CoreError::Database(e)
            })?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn rename_younger_than(&self, age: i32, username: String) -> Result<u64, CoreError> {
        let result = members::Entity::update_many()
            .col_expr(members::Column::Username, Expr::value(username))
            .filter(members::Column::Age.lt(age))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to rename members: {}", e);
                CoreError::Database(e)
            })?;

        info!(rows = result.rows_affected, age, "renamed members younger than age");
        Ok(result.rows_affected)
    }

    async fn add_to_ages(&self, delta: i32) -> Result<u64, CoreError> {
        let result = members::Entity::update_many()
            .col_expr(
                members::Column::Age,
                Expr::col(members::Column::Age).add(delta),
            )
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to update member ages: {}", e);
                CoreError::Database(e)
            })?;

        info!(rows = result.rows_affected, delta, "shifted member ages");
        Ok(result.rows_affected)
    }

    async fn delete_aged_at_most(&self, age: i32) -> Result<u64, CoreError> {
        let result = members::Entity::delete_many()
            .filter(members::Column::Age.lte(age))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete members: {}", e);
                CoreError::Database(e)
            })?;

        info!(rows = result.rows_affected, age, "deleted members aged at most");
        Ok(result.rows_affected)
    }
}
