use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    member::{
        entities::{Member, MemberWithTeam},
        ports::{MemberRepository, MemberService},
        value_objects::{AssignTeamInput, CreateMemberInput, TeamLoading},
    },
    search::ports::MemberSearchRepository,
    team::ports::TeamRepository,
};

impl<T, M, S> Service<T, M, S>
where
    T: TeamRepository,
    M: MemberRepository,
    S: MemberSearchRepository,
{
    async fn ensure_team_exists(&self, team_id: Option<i32>) -> Result<(), CoreError> {
        if let Some(team_id) = team_id {
            self.team_repository
                .get_by_id(team_id)
                .await?
                .ok_or(CoreError::NotFound)?;
        }

        Ok(())
    }
}

impl<T, M, S> MemberService for Service<T, M, S>
where
    T: TeamRepository,
    M: MemberRepository,
    S: MemberSearchRepository,
{
    #[instrument(skip(self))]
    async fn create_member(&self, input: CreateMemberInput) -> Result<Member, CoreError> {
        input.validate().map_err(CoreError::Invalid)?;
        self.ensure_team_exists(input.team_id).await?;

        self.member_repository.create_member(input).await
    }

    #[instrument(skip(self))]
    async fn assign_team(&self, input: AssignTeamInput) -> Result<Member, CoreError> {
        let mut member = self
            .member_repository
            .get_by_id(input.member_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.ensure_team_exists(input.team_id).await?;
        member.team_id = input.team_id;

        self.member_repository.update_member(member).await
    }

    async fn get_member(&self, member_id: i32) -> Result<Member, CoreError> {
        self.member_repository
            .get_by_id(member_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_member_with_team(
        &self,
        member_id: i32,
        loading: TeamLoading,
    ) -> Result<MemberWithTeam, CoreError> {
        match loading {
            TeamLoading::Eager => self
                .member_repository
                .get_with_team(member_id)
                .await?
                .ok_or(CoreError::NotFound),
            TeamLoading::Deferred => {
                let member = self.get_member(member_id).await?;
                let team = match member.team_id {
                    Some(team_id) => self.team_repository.get_by_id(team_id).await?,
                    None => None,
                };

                Ok(MemberWithTeam { member, team })
            }
        }
    }

    async fn get_members_by_username(&self, username: String) -> Result<Vec<Member>, CoreError> {
        self.member_repository.fetch_by_username(username).await
    }

    async fn get_members_of_team(&self, team_id: i32) -> Result<Vec<Member>, CoreError> {
        self.ensure_team_exists(Some(team_id)).await?;

        self.member_repository.fetch_by_team(team_id).await
    }

    #[instrument(skip(self))]
    async fn rename_members_younger_than(
        &self,
        age: i32,
        username: String,
    ) -> Result<u64, CoreError> {
        let rows = self
            .member_repository
            .rename_younger_than(age, username)
            .await?;
        info!(rows, "renamed members");

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn add_to_all_ages(&self, delta: i32) -> Result<u64, CoreError> {
        self.member_repository.add_to_ages(delta).await
    }

    #[instrument(skip(self))]
    async fn delete_members_aged_at_most(&self, age: i32) -> Result<u64, CoreError> {
        let rows = self.member_repository.delete_aged_at_most(age).await?;
        info!(rows, "deleted members");

        Ok(rows)
    }
}
