use crate::{
    domain::search::value_objects::MemberTeamDto, infrastructure::search::query::MemberTeamRow,
};

impl From<MemberTeamRow> for MemberTeamDto {
    fn from(row: MemberTeamRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}
