use crate::{
    domain::{
        member::entities::{Member, MemberWithTeam},
        team::entities::Team,
    },
    entity::{members, teams},
};

impl From<&members::Model> for Member {
    fn from(model: &members::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            age: model.age,
            team_id: model.team_id,
        }
    }
}

impl From<members::Model> for Member {
    fn from(model: members::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            age: model.age,
            team_id: model.team_id,
        }
    }
}

impl From<(members::Model, Option<teams::Model>)> for MemberWithTeam {
    fn from((member, team): (members::Model, Option<teams::Model>)) -> Self {
        Self {
            member: Member::from(member),
            team: team.map(Team::from),
        }
    }
}
