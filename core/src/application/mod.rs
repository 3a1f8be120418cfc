use tracing::info;

use crate::{
    domain::{
        common::{RosterConfig, entities::app_errors::CoreError, services::Service},
        member::{ports::MemberService, value_objects::CreateMemberInput},
        team::{ports::TeamService, value_objects::CreateTeamInput},
    },
    infrastructure::{
        db::RosterDatabase,
        member::repositories::member_repository::SqlMemberRepository,
        search::repositories::member_search_repository::SqlMemberSearchRepository,
        team::repositories::team_repository::SqlTeamRepository,
    },
};

pub type RosterService =
    Service<SqlTeamRepository, SqlMemberRepository, SqlMemberSearchRepository>;

/// Connects to the configured database, creates missing tables and wires the
/// repositories into the service.
pub async fn create_service(config: RosterConfig) -> Result<RosterService, anyhow::Error> {
    let database = RosterDatabase::new(&config.database).await?;
    database.ensure_schema().await?;

    Ok(service_from_database(&database))
}

pub fn service_from_database(database: &RosterDatabase) -> RosterService {
    Service::new(
        SqlTeamRepository::new(database.get_db()),
        SqlMemberRepository::new(database.get_db()),
        SqlMemberSearchRepository::new(database.get_db()),
    )
}

/// Inserts teamA and teamB with member1..member4 (ages 10 to 40), the first
/// two in teamA and the last two in teamB.
pub async fn seed_fixture<S>(service: &S) -> Result<(), CoreError>
where
    S: TeamService + MemberService,
{
    let team_a = service
        .create_team(CreateTeamInput {
            name: "teamA".to_string(),
        })
        .await?;
    let team_b = service
        .create_team(CreateTeamInput {
            name: "teamB".to_string(),
        })
        .await?;

    let fixture = [
        ("member1", 10, team_a.id),
        ("member2", 20, team_a.id),
        ("member3", 30, team_b.id),
        ("member4", 40, team_b.id),
    ];

    for (username, age, team_id) in fixture {
        service
            .create_member(CreateMemberInput::new(username, age, Some(team_id)))
            .await?;
    }

    info!(teams = 2, members = fixture.len(), "fixture seeded");
    Ok(())
}
