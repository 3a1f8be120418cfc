use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberInput {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl CreateMemberInput {
    pub fn new(username: impl Into<String>, age: i32, team_id: Option<i32>) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.age < 0 {
            return Err("age must be >= 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignTeamInput {
    pub member_id: i32,
    /// `None` detaches the member from its current team.
    pub team_id: Option<i32>,
}

/// How the team of a member is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamLoading {
    /// Member and team in a single joined query.
    #[default]
    Eager,
    /// Member first, team looked up afterwards.
    Deferred,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_age_is_rejected() {
        let input = CreateMemberInput::new("member1", -1, None);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_unnamed_member_is_valid() {
        let input = CreateMemberInput {
            username: None,
            age: 100,
            team_id: None,
        };
        assert!(input.validate().is_ok());
    }
}
