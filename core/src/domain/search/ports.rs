use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    member::entities::Member,
    search::value_objects::{
        CountStrategy, MemberLookup, MemberSearchCondition, MemberTeamDto, OffsetLimit, Paginated,
        SearchOptions,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MemberSearchService: Send + Sync {
    /// Every matching row, unpaged.
    fn search(
        &self,
        condition: MemberSearchCondition,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    fn search_with(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    /// Content and total fetched together.
    fn search_page_simple(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<MemberTeamDto>, CoreError>> + Send;

    /// Content query followed by a count query that always runs.
    fn search_page_complex(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<MemberTeamDto>, CoreError>> + Send;

    /// Content query followed by a count query that is skipped when the total is known.
    fn search_page_complex_optimized(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
    ) -> impl Future<Output = Result<Paginated<MemberTeamDto>, CoreError>> + Send;

    fn search_page(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
        options: SearchOptions,
        strategy: CountStrategy,
    ) -> impl Future<Output = Result<Paginated<MemberTeamDto>, CoreError>> + Send;

    fn count_members(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_members(
        &self,
        lookup: MemberLookup,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MemberSearchRepository: Send + Sync {
    fn search(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    /// Single statement carrying the total alongside every row.
    fn search_page_with_total(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
        options: SearchOptions,
    ) -> impl Future<Output = Result<Paginated<MemberTeamDto>, CoreError>> + Send;

    /// Content and count statements run in one transaction.
    fn search_page(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
        options: SearchOptions,
        strategy: CountStrategy,
    ) -> impl Future<Output = Result<Paginated<MemberTeamDto>, CoreError>> + Send;

    fn count(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_members(
        &self,
        lookup: MemberLookup,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;
}
