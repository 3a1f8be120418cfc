pub mod common;
pub mod member;
pub mod search;
pub mod team;
