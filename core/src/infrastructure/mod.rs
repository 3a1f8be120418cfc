pub mod db;
pub mod member;
pub mod search;
pub mod team;
