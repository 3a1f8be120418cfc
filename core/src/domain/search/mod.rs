pub mod pagination;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use ports::{MemberSearchRepository, MemberSearchService};
pub use value_objects::{
    CountStrategy, JoinStrategy, MemberLookup, MemberSearchCondition, MemberTeamDto, OffsetLimit,
    Paginated, SearchOptions, SortDirection, SortField, SortSpec,
};
