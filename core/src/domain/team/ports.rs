use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    team::{
        entities::{Team, TeamAgeStats},
        value_objects::{CreateTeamInput, RenameTeamInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TeamService: Send + Sync {
    fn create_team(
        &self,
        input: CreateTeamInput,
    ) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn rename_team(
        &self,
        input: RenameTeamInput,
    ) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn get_team(&self, team_id: i32) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn get_teams(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    fn delete_team(&self, team_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_team_age_stats(
        &self,
    ) -> impl Future<Output = Result<Vec<TeamAgeStats>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TeamRepository: Send + Sync {
    fn create_team(&self, name: String) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn update_team(&self, team: Team) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn get_by_id(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Option<Team>, CoreError>> + Send;

    fn fetch_teams(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    /// Clears `team_id` on every member of the team, then removes the team.
    /// Returns `false` when no team was deleted.
    fn delete_team(&self, team_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn fetch_age_stats(&self) -> impl Future<Output = Result<Vec<TeamAgeStats>, CoreError>> + Send;
}
