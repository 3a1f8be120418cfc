use serde::{Deserialize, Serialize};

use crate::domain::team::entities::Team;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Ord, PartialOrd)]
pub struct Member {
    pub id: i32,
    /// Unnamed members are allowed.
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl Member {
    pub fn belongs_to(&self, team: &Team) -> bool {
        self.team_id == Some(team.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWithTeam {
    pub member: Member,
    pub team: Option<Team>,
}
