#![allow(dead_code)]

use std::sync::Arc;

use roster_core::{
    application::{RosterService, seed_fixture, service_from_database},
    domain::{
        common::DatabaseConfig,
        search::value_objects::MemberTeamDto,
    },
    infrastructure::db::RosterDatabase,
};
use sea_orm::DatabaseConnection;

pub struct TestRoster {
    pub db: Arc<DatabaseConnection>,
    pub service: RosterService,
}

/// Fresh in-memory database holding teamA(member1, member2) and
/// teamB(member3, member4), ages 10, 20, 30, 40.
pub async fn seeded_roster() -> TestRoster {
    let roster = empty_roster().await;
    seed_fixture(&roster.service)
        .await
        .expect("fixture should seed");
    roster
}

pub async fn empty_roster() -> TestRoster {
    let database = RosterDatabase::new(&DatabaseConfig::new("sqlite::memory:"))
        .await
        .expect("in-memory sqlite should connect");
    database
        .ensure_schema()
        .await
        .expect("schema should be created");

    TestRoster {
        db: database.get_db(),
        service: service_from_database(&database),
    }
}

pub fn usernames(rows: &[MemberTeamDto]) -> Vec<&str> {
    rows.iter()
        .map(|row| row.username.as_deref().unwrap_or("<none>"))
        .collect()
}
