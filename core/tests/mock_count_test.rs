use std::{collections::BTreeMap, sync::Arc};

use roster_core::{
    domain::search::{
        ports::MemberSearchRepository,
        value_objects::{CountStrategy, MemberSearchCondition, OffsetLimit, SearchOptions},
    },
    infrastructure::search::repositories::member_search_repository::SqlMemberSearchRepository,
};
use sea_orm::{DatabaseBackend, MockDatabase, Value};

fn row(member_id: i32, username: &str, age: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("member_id", Value::Int(Some(member_id))),
        ("username", Value::String(Some(Box::new(username.to_string())))),
        ("age", Value::Int(Some(age))),
        ("team_id", Value::Int(Some(2))),
        ("team_name", Value::String(Some(Box::new("teamB".to_string())))),
    ])
}

fn content() -> Vec<BTreeMap<&'static str, Value>> {
    vec![row(3, "member3", 30), row(4, "member4", 40)]
}

#[tokio::test]
async fn test_optimized_short_first_page_issues_no_count() {
    // Only the content result is queued; a count statement would find nothing to read.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([content()])
        .into_connection();
    let repository = SqlMemberSearchRepository::new(Arc::new(db));

    let page = repository
        .search_page(
            MemberSearchCondition::default().with_team_name("teamB"),
            OffsetLimit::new(0, 20),
            SearchOptions::default(),
            CountStrategy::WhenNeeded,
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.count, 2);
}

#[tokio::test]
async fn test_always_strategy_reads_the_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([content()])
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(2)),
        )])]])
        .into_connection();
    let repository = SqlMemberSearchRepository::new(Arc::new(db));

    let page = repository
        .search_page(
            MemberSearchCondition::default().with_team_name("teamB"),
            OffsetLimit::new(0, 20),
            SearchOptions::default(),
            CountStrategy::Always,
        )
        .await
        .unwrap();

    assert_eq!(page.count, 2);
}

fn count_row(total: i64) -> Vec<BTreeMap<&'static str, Value>> {
    vec![BTreeMap::from([("num_items", Value::BigInt(Some(total)))])]
}

#[tokio::test]
async fn test_empty_windowed_page_counts_inside_its_transaction() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .append_query_results([count_row(4)])
            .into_connection(),
    );
    let repository = SqlMemberSearchRepository::new(Arc::clone(&db));

    let page = repository
        .search_page_with_total(
            MemberSearchCondition::default(),
            OffsetLimit::new(10, 3),
            SearchOptions::default(),
        )
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.count, 4);

    drop(repository);
    let log = Arc::try_unwrap(db)
        .expect("connection should no longer be shared")
        .into_transaction_log();
    // Content and count statements are recorded as a single transaction.
    assert_eq!(log.len(), 1);
}
