use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

/// Optional filters over the member/team join. An absent field does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower bound on age.
    pub age_goe: Option<i32>,
    /// Inclusive upper bound on age.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age_goe: i32) -> Self {
        self.age_goe = Some(age_goe);
        self
    }

    pub fn with_age_loe(mut self, age_loe: i32) -> Self {
        self.age_loe = Some(age_loe);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.username.is_none()
            && self.team_name.is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

/// Two-field equality lookup on members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLookup {
    pub username: Option<String>,
    pub age: Option<i32>,
}

/// Flat projection of a member joined with its (optional) team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinStrategy {
    /// Members without a team are kept, team columns are null.
    #[default]
    Left,
    /// Only members that have a team.
    Inner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    MemberId,
    Username,
    Age,
    TeamName,
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member_id" | "id" => Ok(SortField::MemberId),
            "username" => Ok(SortField::Username),
            "age" => Ok(SortField::Age),
            "team_name" => Ok(SortField::TeamName),
            other => Err(CoreError::Invalid(format!("unknown sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parse sort string like "-age,username"
    pub fn parse_list(s: &str) -> Result<Vec<Self>, CoreError> {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                sorts.push(SortSpec::desc(stripped.parse()?));
            } else {
                sorts.push(SortSpec::asc(part.parse()?));
            }
        }
        Ok(sorts)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub join: JoinStrategy,
    /// Empty means member id ascending.
    pub sort: Vec<SortSpec>,
}

/// Whether the total is counted for every page or only when it cannot be inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CountStrategy {
    #[default]
    Always,
    WhenNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetLimit {
    pub offset: i64,
    pub limit: i64,
}

impl Default for OffsetLimit {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

impl OffsetLimit {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Zero-based page index and page size.
    pub fn of_page(page: i64, size: i64) -> Result<Self, CoreError> {
        if page < 0 || size < 0 {
            return Err(CoreError::InvalidPagination(
                "page and size must be >= 0".to_string(),
            ));
        }
        let offset = page
            .checked_mul(size)
            .ok_or_else(|| CoreError::InvalidPagination("page offset overflows".to_string()))?;

        Ok(Self::new(offset, size))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.offset < 0 {
            return Err(CoreError::InvalidPagination(
                "offset must be >= 0".to_string(),
            ));
        }
        if self.limit < 0 {
            return Err(CoreError::InvalidPagination("limit must be >= 0".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub offset: i64,
    pub limit: i64,
    pub count: i64,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> i64 {
        if self.limit <= 0 || self.count <= 0 {
            return 0;
        }
        self.count / self.limit + i64::from(self.count % self.limit != 0)
    }

    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.items.len() as i64) < self.count
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            count: self.count,
        }
    }
}
