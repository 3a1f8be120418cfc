use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    member::ports::MemberRepository,
    search::ports::MemberSearchRepository,
    team::{
        entities::{Team, TeamAgeStats},
        ports::{TeamRepository, TeamService},
        value_objects::{CreateTeamInput, RenameTeamInput},
    },
};

impl<T, M, S> TeamService for Service<T, M, S>
where
    T: TeamRepository,
    M: MemberRepository,
    S: MemberSearchRepository,
{
    #[instrument(skip(self), fields(name = %input.name))]
    async fn create_team(&self, input: CreateTeamInput) -> Result<Team, CoreError> {
        input.validate().map_err(CoreError::Invalid)?;

        self.team_repository.create_team(input.name).await
    }

    #[instrument(skip(self), fields(team_id = input.team_id))]
    async fn rename_team(&self, input: RenameTeamInput) -> Result<Team, CoreError> {
        input.validate().map_err(CoreError::Invalid)?;

        let mut team = self
            .team_repository
            .get_by_id(input.team_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        team.name = input.name;

        self.team_repository.update_team(team).await
    }

    async fn get_team(&self, team_id: i32) -> Result<Team, CoreError> {
        self.team_repository
            .get_by_id(team_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_teams(&self) -> Result<Vec<Team>, CoreError> {
        self.team_repository.fetch_teams().await
    }

    #[instrument(skip(self))]
    async fn delete_team(&self, team_id: i32) -> Result<(), CoreError> {
        let deleted = self.team_repository.delete_team(team_id).await?;

        if !deleted {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn get_team_age_stats(&self) -> Result<Vec<TeamAgeStats>, CoreError> {
        self.team_repository.fetch_age_stats().await
    }
}
