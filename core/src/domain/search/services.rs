use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    member::{entities::Member, ports::MemberRepository},
    search::{
        ports::{MemberSearchRepository, MemberSearchService},
        value_objects::{
            CountStrategy, MemberLookup, MemberSearchCondition, MemberTeamDto, OffsetLimit,
            Paginated, SearchOptions,
        },
    },
    team::ports::TeamRepository,
};

impl<T, M, S> MemberSearchService for Service<T, M, S>
where
    T: TeamRepository,
    M: MemberRepository,
    S: MemberSearchRepository,
{
    async fn search(
        &self,
        condition: MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        self.search_with(condition, SearchOptions::default()).await
    }

    #[instrument(skip(self))]
    async fn search_with(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        let rows = self
            .member_search_repository
            .search(condition, options)
            .await?;
        debug!(rows = rows.len(), "member search finished");

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn search_page_simple(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
    ) -> Result<Paginated<MemberTeamDto>, CoreError> {
        page.validate()?;

        self.member_search_repository
            .search_page_with_total(condition, page, SearchOptions::default())
            .await
    }

    async fn search_page_complex(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
    ) -> Result<Paginated<MemberTeamDto>, CoreError> {
        self.search_page(
            condition,
            page,
            SearchOptions::default(),
            CountStrategy::Always,
        )
        .await
    }

    async fn search_page_complex_optimized(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
    ) -> Result<Paginated<MemberTeamDto>, CoreError> {
        self.search_page(
            condition,
            page,
            SearchOptions::default(),
            CountStrategy::WhenNeeded,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn search_page(
        &self,
        condition: MemberSearchCondition,
        page: OffsetLimit,
        options: SearchOptions,
        strategy: CountStrategy,
    ) -> Result<Paginated<MemberTeamDto>, CoreError> {
        page.validate()?;

        let result = self
            .member_search_repository
            .search_page(condition, page, options, strategy)
            .await?;
        debug!(
            items = result.items.len(),
            total = result.count,
            "member page fetched"
        );

        Ok(result)
    }

    async fn count_members(
        &self,
        condition: MemberSearchCondition,
        options: SearchOptions,
    ) -> Result<u64, CoreError> {
        self.member_search_repository.count(condition, options).await
    }

    async fn find_members(&self, lookup: MemberLookup) -> Result<Vec<Member>, CoreError> {
        self.member_search_repository.find_members(lookup).await
    }
}
