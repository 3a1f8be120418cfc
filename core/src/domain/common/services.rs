use crate::domain::{
    member::ports::MemberRepository, search::ports::MemberSearchRepository,
    team::ports::TeamRepository,
};

/// Domain service over the roster repositories.
#[derive(Clone)]
pub struct Service<T, M, S>
where
    T: TeamRepository,
    M: MemberRepository,
    S: MemberSearchRepository,
{
    pub(crate) team_repository: T,
    pub(crate) member_repository: M,
    pub(crate) member_search_repository: S,
}

impl<T, M, S> Service<T, M, S>
where
    T: TeamRepository,
    M: MemberRepository,
    S: MemberSearchRepository,
{
    pub fn new(team_repository: T, member_repository: M, member_search_repository: S) -> Self {
        Self {
            team_repository,
            member_repository,
            member_search_repository,
        }
    }
}
