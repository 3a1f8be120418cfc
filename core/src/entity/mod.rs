//! `SeaORM` entity definitions for the roster schema.

pub mod members;
pub mod teams;
