pub mod mappers;
pub mod predicates;
pub mod query;
pub mod repositories;
