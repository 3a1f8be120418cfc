pub mod team_repository;
