use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    member::{
        entities::{Member, MemberWithTeam},
        value_objects::{AssignTeamInput, CreateMemberInput, TeamLoading},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MemberService: Send + Sync {
    fn create_member(
        &self,
        input: CreateMemberInput,
    ) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn assign_team(
        &self,
        input: AssignTeamInput,
    ) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_member(&self, member_id: i32) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_member_with_team(
        &self,
        member_id: i32,
        loading: TeamLoading,
    ) -> impl Future<Output = Result<MemberWithTeam, CoreError>> + Send;

    fn get_members_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn get_members_of_team(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn rename_members_younger_than(
        &self,
        age: i32,
        username: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn add_to_all_ages(&self, delta: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete_members_aged_at_most(
        &self,
        age: i32,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MemberRepository: Send + Sync {
    fn create_member(
        &self,
        input: CreateMemberInput,
    ) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn update_member(&self, member: Member)
    -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_by_id(
        &self,
        member_id: i32,
    ) -> impl Future<Output = Result<Option<Member>, CoreError>> + Send;

    /// Member and team fetched together through the join.
    fn get_with_team(
        &self,
        member_id: i32,
    ) -> impl Future<Output = Result<Option<MemberWithTeam>, CoreError>> + Send;

    fn fetch_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn fetch_by_team(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn rename_younger_than(
        &self,
        age: i32,
        username: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn add_to_ages(&self, delta: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete_aged_at_most(&self, age: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
