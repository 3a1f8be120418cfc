//! Optional predicates over the member/team join.
//!
//! Each builder returns `None` when its input is absent. Absent predicates are
//! the identity of a conjunction, so composing any subset of them never fails
//! and composing none of them matches every row.

use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{Expr, SimpleExpr},
};

use crate::{
    domain::search::value_objects::{MemberLookup, MemberSearchCondition},
    entity::{members, teams},
};

pub fn username_eq(username: Option<&str>) -> Option<SimpleExpr> {
    username.map(|username| members::Column::Username.eq(username))
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<SimpleExpr> {
    team_name.map(|team_name| teams::Column::Name.eq(team_name))
}

pub fn age_goe(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.gte(age))
}

pub fn age_loe(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.lte(age))
}

pub fn age_eq(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.eq(age))
}

/// Matches every row.
pub fn tautology() -> SimpleExpr {
    Expr::value(true)
}

fn search_predicates(condition: &MemberSearchCondition) -> [Option<SimpleExpr>; 4] {
    [
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
}

/// AND of the present predicates, `None` when every input is absent.
pub fn and_all<I>(predicates: I) -> Option<SimpleExpr>
where
    I: IntoIterator<Item = Option<SimpleExpr>>,
{
    predicates.into_iter().flatten().reduce(SimpleExpr::and)
}

/// Predicates handed to the query as a list; absent ones are dropped.
pub fn compose_filter(condition: &MemberSearchCondition) -> Condition {
    search_predicates(condition)
        .into_iter()
        .fold(Condition::all(), |filter, predicate| {
            filter.add_option(predicate)
        })
}

/// Predicates chained into a single expression.
pub fn compose_filter_chained(condition: &MemberSearchCondition) -> SimpleExpr {
    and_all(search_predicates(condition)).unwrap_or_else(tautology)
}

/// Conjunction of optional username and age equality.
pub fn all_eq(username: Option<&str>, age: Option<i32>) -> SimpleExpr {
    and_all([username_eq(username), age_eq(age)]).unwrap_or_else(tautology)
}

/// Same filter as [`all_eq`], grown one clause at a time.
pub fn lookup_filter(lookup: &MemberLookup) -> Condition {
    let mut builder = Condition::all();

    if let Some(ref username) = lookup.username {
        builder = builder.add(members::Column::Username.eq(username.as_str()));
    }

    if let Some(age) = lookup.age {
        builder = builder.add(members::Column::Age.eq(age));
    }

    builder
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    /// Rendered WHERE clause only; the select list always names every column.
    fn where_sql<F: sea_orm::sea_query::IntoCondition>(filter: F) -> String {
        let sql = members::Entity::find()
            .filter(filter)
            .build(DbBackend::Postgres)
            .to_string();

        sql.split_once(" WHERE ")
            .map(|(_, clause)| clause.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_absent_inputs_build_nothing() {
        assert!(username_eq(None).is_none());
        assert!(team_name_eq(None).is_none());
        assert!(age_goe(None).is_none());
        assert!(age_loe(None).is_none());
        assert!(and_all([None, None]).is_none());
    }

    #[test]
    fn test_unconstrained_condition_is_empty() {
        let filter = compose_filter(&MemberSearchCondition::default());

        assert!(filter.is_empty());
        let clause = where_sql(filter);
        assert!(clause.is_empty() || clause == "TRUE", "unexpected filter: {clause}");
    }

    #[test]
    fn test_compose_filter_keeps_present_predicates_only() {
        let condition = MemberSearchCondition::default()
            .with_age_goe(35)
            .with_team_name("teamB");

        let filter = compose_filter(&condition);
        assert_eq!(filter.len(), 2);

        let sql = where_sql(filter);
        assert!(sql.contains(r#""teams"."name" = 'teamB'"#));
        assert!(sql.contains(r#""members"."age" >= 35"#));
        assert!(!sql.contains("username"));
        assert!(!sql.contains("<="));
    }

    #[test]
    fn test_chained_filter_joins_with_and() {
        let condition = MemberSearchCondition::default()
            .with_username("member1")
            .with_age_loe(40);

        let sql = where_sql(compose_filter_chained(&condition));
        assert!(sql.contains(r#""members"."username" = 'member1'"#));
        assert!(sql.contains(" AND "));
        assert!(sql.contains(r#""members"."age" <= 40"#));
    }

    #[test]
    fn test_chained_filter_without_inputs_is_true() {
        let clause = where_sql(compose_filter_chained(&MemberSearchCondition::default()));
        assert_eq!(clause, "TRUE");
    }

    #[test]
    fn test_all_eq_with_one_side_absent() {
        let sql = where_sql(all_eq(None, Some(10)));
        assert!(sql.contains(r#""members"."age" = 10"#));
        assert!(!sql.contains("username"));
    }

    #[test]
    fn test_lookup_filter_matches_all_eq() {
        let lookup = MemberLookup {
            username: Some("member1".to_string()),
            age: Some(10),
        };

        let builder = where_sql(lookup_filter(&lookup));
        assert!(builder.contains(r#""members"."username" = 'member1'"#));
        assert!(builder.contains(r#""members"."age" = 10"#));
        assert_eq!(lookup_filter(&lookup).len(), 2);
        assert!(lookup_filter(&MemberLookup::default()).is_empty());
    }
}
