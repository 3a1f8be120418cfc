use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Ord, PartialOrd)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

/// Aggregate row of the per-team statistics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAgeStats {
    pub team_name: String,
    pub member_count: i64,
    pub average_age: f64,
}
