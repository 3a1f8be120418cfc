use sea_orm::{
    Condition, ConnectionTrait, DbBackend, DbErr, EntityTrait, FromQueryResult, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select,
    Statement,
    sea_query::{Expr, IntoCondition, NullOrdering},
};

use crate::{
    domain::search::value_objects::{
        JoinStrategy, MemberSearchCondition, OffsetLimit, SearchOptions, SortDirection, SortField,
        SortSpec,
    },
    entity::{members, teams},
    infrastructure::search::predicates::compose_filter,
};

/// One row of the member/team projection.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MemberTeamRow {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

/// Projection row carrying the windowed total of the whole filtered set.
#[derive(Debug, Clone, FromQueryResult)]
pub struct MemberTeamCountedRow {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub total_count: i64,
}

impl From<MemberTeamCountedRow> for MemberTeamRow {
    fn from(row: MemberTeamCountedRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}

/// Members joined with their team, filtered, ordered and optionally paged.
///
/// Rows are always ordered by member id last so that pages never overlap.
#[derive(Debug, Clone)]
pub struct MemberTeamQuery {
    filter: Condition,
    join: JoinStrategy,
    order: Vec<SortSpec>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl MemberTeamQuery {
    pub fn new<F>(filter: F, options: SearchOptions) -> Self
    where
        F: IntoCondition,
    {
        Self {
            filter: filter.into_condition(),
            join: options.join,
            order: options.sort,
            offset: None,
            limit: None,
        }
    }

    pub fn from_condition(condition: &MemberSearchCondition, options: SearchOptions) -> Self {
        Self::new(compose_filter(condition), options)
    }

    pub fn paged(mut self, page: &OffsetLimit) -> Self {
        self.offset = Some(page.offset.max(0) as u64);
        self.limit = Some(page.limit.max(0) as u64);
        self
    }

    fn join_type(&self) -> JoinType {
        match self.join {
            JoinStrategy::Left => JoinType::LeftJoin,
            JoinStrategy::Inner => JoinType::InnerJoin,
        }
    }

    fn filtered(&self) -> Select<members::Entity> {
        members::Entity::find()
            .join(self.join_type(), members::Relation::Teams.def())
            .filter(self.filter.clone())
    }

    fn projected(&self) -> Select<members::Entity> {
        let mut select = self
            .filtered()
            .select_only()
            .column_as(members::Column::Id, "member_id")
            .column_as(members::Column::Username, "username")
            .column_as(members::Column::Age, "age")
            .column_as(teams::Column::Id, "team_id")
            .column_as(teams::Column::Name, "team_name");

        for spec in &self.order {
            select = order_by(select, spec);
        }

        if !self.order.iter().any(|spec| spec.field == SortField::MemberId) {
            select = select.order_by_asc(members::Column::Id);
        }

        select.offset(self.offset).limit(self.limit)
    }

    pub fn statement(&self, backend: DbBackend) -> Statement {
        self.projected().build(backend)
    }

    pub async fn fetch_all<C>(&self, db: &C) -> Result<Vec<MemberTeamRow>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.projected()
            .into_model::<MemberTeamRow>()
            .all(db)
            .await
    }

    /// Size of the whole filtered set. Ordering and paging do not apply.
    pub async fn fetch_count<C>(&self, db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        self.filtered().count(db).await
    }

    /// Page content plus a `COUNT(*) OVER ()` column in one statement.
    /// The total is `None` when the page came back empty.
    pub async fn fetch_with_total<C>(
        &self,
        db: &C,
    ) -> Result<(Vec<MemberTeamRow>, Option<u64>), DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = self
            .projected()
            .column_as(Expr::cust("COUNT(*) OVER ()"), "total_count")
            .into_model::<MemberTeamCountedRow>()
            .all(db)
            .await?;

        let total = rows.first().map(|row| row.total_count.max(0) as u64);

        Ok((rows.into_iter().map(MemberTeamRow::from).collect(), total))
    }
}

fn order_by(select: Select<members::Entity>, spec: &SortSpec) -> Select<members::Entity> {
    let order = match spec.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    match spec.field {
        SortField::MemberId => select.order_by(members::Column::Id, order),
        SortField::Age => select.order_by(members::Column::Age, order),
        SortField::Username => {
            select.order_by_with_nulls(members::Column::Username, order, NullOrdering::Last)
        }
        SortField::TeamName => {
            select.order_by_with_nulls(teams::Column::Name, order, NullOrdering::Last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(query: &MemberTeamQuery) -> String {
        query.statement(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_left_join_by_default() {
        let query = MemberTeamQuery::from_condition(
            &MemberSearchCondition::default(),
            SearchOptions::default(),
        );

        let sql = sql(&query);
        assert!(sql.contains(r#"LEFT JOIN "teams""#));
        assert!(sql.contains(r#""teams"."id" AS "team_id""#));
        assert!(sql.contains(r#""teams"."name" AS "team_name""#));
        assert!(sql.ends_with(r#"ORDER BY "members"."id" ASC"#));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn test_inner_join_strategy() {
        let options = SearchOptions {
            join: JoinStrategy::Inner,
            sort: Vec::new(),
        };
        let query = MemberTeamQuery::from_condition(&MemberSearchCondition::default(), options);

        assert!(sql(&query).contains(r#"INNER JOIN "teams""#));
    }

    #[test]
    fn test_paged_query_has_limit_and_offset() {
        let query = MemberTeamQuery::from_condition(
            &MemberSearchCondition::default(),
            SearchOptions::default(),
        )
        .paged(&OffsetLimit::new(6, 3));

        let sql = sql(&query);
        assert!(sql.contains("LIMIT 3"));
        assert!(sql.contains("OFFSET 6"));
    }

    #[test]
    fn test_custom_order_keeps_id_tiebreak() {
        let options = SearchOptions {
            join: JoinStrategy::Left,
            sort: vec![
                SortSpec::desc(SortField::Age),
                SortSpec::asc(SortField::Username),
            ],
        };
        let query = MemberTeamQuery::from_condition(&MemberSearchCondition::default(), options);

        let sql = sql(&query);
        assert!(sql.contains(r#""members"."age" DESC"#));
        assert!(sql.contains(r#""members"."username" ASC NULLS LAST"#));
        assert!(sql.ends_with(r#""members"."id" ASC"#));
    }

    #[test]
    fn test_explicit_id_order_is_not_repeated() {
        let options = SearchOptions {
            join: JoinStrategy::Left,
            sort: vec![SortSpec::desc(SortField::MemberId)],
        };
        let query = MemberTeamQuery::from_condition(&MemberSearchCondition::default(), options);

        let sql = sql(&query);
        assert!(sql.ends_with(r#"ORDER BY "members"."id" DESC"#));
        assert_eq!(sql.matches(r#""members"."id" ASC"#).count(), 0);
    }
}
