use sea_orm::FromQueryResult;

use crate::{
    domain::team::entities::{Team, TeamAgeStats},
    entity::teams,
};

impl From<&teams::Model> for Team {
    fn from(model: &teams::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Raw aggregate row; the average is derived from the sum so every backend
/// hands back plain integers.
#[derive(Debug, FromQueryResult)]
pub struct TeamAgeRow {
    pub team_name: String,
    pub member_count: i64,
    pub age_sum: Option<i64>,
}

impl From<TeamAgeRow> for TeamAgeStats {
    fn from(row: TeamAgeRow) -> Self {
        let average_age = match (row.age_sum, row.member_count) {
            (Some(sum), count) if count > 0 => sum as f64 / count as f64,
            _ => 0.0,
        };

        Self {
            team_name: row.team_name,
            member_count: row.member_count,
            average_age,
        }
    }
}
