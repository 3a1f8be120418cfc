mod common;

use roster_core::domain::{
    common::entities::app_errors::CoreError,
    member::{
        ports::MemberService,
        value_objects::{AssignTeamInput, CreateMemberInput, TeamLoading},
    },
    search::{ports::MemberSearchService, value_objects::MemberSearchCondition},
    team::{
        ports::TeamService,
        value_objects::{CreateTeamInput, RenameTeamInput},
    },
};

use common::{empty_roster, seeded_roster, usernames};

#[tokio::test]
async fn test_member_belongs_to_created_team() {
    let roster = empty_roster().await;

    let team = roster
        .service
        .create_team(CreateTeamInput {
            name: "teamA".to_string(),
        })
        .await
        .unwrap();
    let member = roster
        .service
        .create_member(CreateMemberInput::new("member1", 10, Some(team.id)))
        .await
        .unwrap();

    assert!(member.belongs_to(&team));
    assert_eq!(
        roster.service.get_member(member.id).await.unwrap(),
        member
    );
}

#[tokio::test]
async fn test_member_with_missing_team_is_rejected() {
    let roster = empty_roster().await;

    let result = roster
        .service
        .create_member(CreateMemberInput::new("member1", 10, Some(99)))
        .await;

    assert!(matches!(result, Err(CoreError::NotFound)));
}

#[tokio::test]
async fn test_eager_and_deferred_team_loading_agree() {
    let roster = seeded_roster().await;
    let member = roster
        .service
        .get_members_by_username("member3".to_string())
        .await
        .unwrap()
        .remove(0);

    let eager = roster
        .service
        .get_member_with_team(member.id, TeamLoading::Eager)
        .await
        .unwrap();
    let deferred = roster
        .service
        .get_member_with_team(member.id, TeamLoading::Deferred)
        .await
        .unwrap();

    assert_eq!(eager, deferred);
    assert_eq!(eager.team.map(|team| team.name).as_deref(), Some("teamB"));
}

#[tokio::test]
async fn test_assign_team_moves_member() {
    let roster = seeded_roster().await;
    let teams = roster.service.get_teams().await.unwrap();
    let (team_a, team_b) = (&teams[0], &teams[1]);

    let member = roster
        .service
        .get_members_by_username("member1".to_string())
        .await
        .unwrap()
        .remove(0);

    roster
        .service
        .assign_team(AssignTeamInput {
            member_id: member.id,
            team_id: Some(team_b.id),
        })
        .await
        .unwrap();

    let team_a_members = roster.service.get_members_of_team(team_a.id).await.unwrap();
    let team_b_members = roster.service.get_members_of_team(team_b.id).await.unwrap();
    assert_eq!(team_a_members.len(), 1);
    assert_eq!(team_b_members.len(), 3);

    let detached = roster
        .service
        .assign_team(AssignTeamInput {
            member_id: member.id,
            team_id: None,
        })
        .await
        .unwrap();
    assert_eq!(detached.team_id, None);
}

#[tokio::test]
async fn test_rename_team_is_visible_in_search() {
    let roster = seeded_roster().await;
    let team = roster.service.get_teams().await.unwrap().remove(0);

    roster
        .service
        .rename_team(RenameTeamInput {
            team_id: team.id,
            name: "teamZ".to_string(),
        })
        .await
        .unwrap();

    let rows = roster
        .service
        .search(MemberSearchCondition::default().with_team_name("teamZ"))
        .await
        .unwrap();
    assert_eq!(usernames(&rows), vec!["member1", "member2"]);
}

#[tokio::test]
async fn test_deleting_team_keeps_its_members() {
    let roster = seeded_roster().await;
    let team_b = roster.service.get_teams().await.unwrap().remove(1);

    roster.service.delete_team(team_b.id).await.unwrap();

    let rows = roster
        .service
        .search(MemberSearchCondition::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows[2..].iter().all(|row| row.team_id.is_none()));
    assert!(rows[2..].iter().all(|row| row.team_name.is_none()));

    let again = roster.service.delete_team(team_b.id).await;
    assert!(matches!(again, Err(CoreError::NotFound)));
}

#[tokio::test]
async fn test_bulk_updates_report_affected_rows() {
    let roster = seeded_roster().await;

    let renamed = roster
        .service
        .rename_members_younger_than(25, "junior".to_string())
        .await
        .unwrap();
    assert_eq!(renamed, 2);
    assert_eq!(
        roster
            .service
            .get_members_by_username("junior".to_string())
            .await
            .unwrap()
            .len(),
        2
    );

    let shifted = roster.service.add_to_all_ages(1).await.unwrap();
    assert_eq!(shifted, 4);
    let rows = roster
        .service
        .search(MemberSearchCondition::default())
        .await
        .unwrap();
    assert_eq!(
        rows.iter().map(|row| row.age).collect::<Vec<_>>(),
        vec![11, 21, 31, 41]
    );

    let deleted = roster.service.delete_members_aged_at_most(21).await.unwrap();
    assert_eq!(deleted, 2);
    let rows = roster
        .service
        .search(MemberSearchCondition::default())
        .await
        .unwrap();
    assert_eq!(usernames(&rows), vec!["member3", "member4"]);
}

#[tokio::test]
async fn test_team_age_stats() {
    let roster = seeded_roster().await;

    let stats = roster.service.get_team_age_stats().await.unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].team_name, "teamA");
    assert_eq!(stats[0].member_count, 2);
    assert_eq!(stats[0].average_age, 15.0);
    assert_eq!(stats[1].team_name, "teamB");
    assert_eq!(stats[1].average_age, 35.0);
}
