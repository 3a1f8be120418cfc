use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameTeamInput {
    pub team_id: i32,
    pub name: String,
}

impl CreateTeamInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("team name must not be empty".to_string());
        }
        Ok(())
    }
}

impl RenameTeamInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("team name must not be empty".to_string());
        }
        Ok(())
    }
}
