use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use roster_core::domain::{
    common::{DatabaseConfig, RosterConfig},
    search::value_objects::{JoinStrategy, MemberSearchCondition, SearchOptions, SortSpec},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "roster", about = "Member and team search over a relational store", version)]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://roster.db?mode=rwc"
    )]
    pub url: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,

    #[arg(long = "database-sqlx-logging", env = "DATABASE_SQLX_LOGGING")]
    pub sqlx_logging: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create the tables if they do not exist.
    Init,
    /// Insert teamA, teamB and member1..member4.
    Seed,
    /// Print every matching member/team row.
    Search {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print one page of matching rows with its total.
    Page {
        #[command(flatten)]
        filter: FilterArgs,

        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: i64,

        #[arg(long, default_value_t = 20)]
        size: i64,

        #[arg(long, value_enum, default_value_t = PageStrategy::Optimized)]
        strategy: PageStrategy,
    },
    /// Print member count and average age per team.
    TeamStats,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct FilterArgs {
    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub team_name: Option<String>,

    #[arg(long)]
    pub age_goe: Option<i32>,

    #[arg(long)]
    pub age_loe: Option<i32>,

    /// Drop members that have no team.
    #[arg(long)]
    pub inner: bool,

    /// Comma separated sort keys, `-` prefix for descending (e.g. `-age,username`).
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageStrategy {
    /// Content and total in one statement.
    Simple,
    /// Separate count statement on every page.
    Complex,
    /// Count statement only when the total is unknown.
    Optimized,
}

impl FilterArgs {
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    pub fn options(&self) -> Result<SearchOptions, anyhow::Error> {
        let sort = match self.sort {
            Some(ref sort) => SortSpec::parse_list(sort)?,
            None => Vec::new(),
        };

        let join = if self.inner {
            JoinStrategy::Inner
        } else {
            JoinStrategy::Left
        };

        Ok(SearchOptions { join, sort })
    }
}

impl From<&DatabaseArgs> for RosterConfig {
    fn from(args: &DatabaseArgs) -> Self {
        let mut database = DatabaseConfig::new(args.url.clone());
        database.max_connections = args.max_connections;
        database.sqlx_logging = args.sqlx_logging;

        RosterConfig { database }
    }
}

#[cfg(test)]
mod tests {
    use roster_core::domain::search::value_objects::{SortDirection, SortField};

    use super::*;

    #[test]
    fn test_page_command_parses_filters() {
        let args = Args::parse_from([
            "roster",
            "page",
            "--age-goe",
            "35",
            "--team-name",
            "teamB",
            "--size",
            "3",
            "--strategy",
            "complex",
        ]);

        let Command::Page {
            filter,
            page,
            size,
            strategy,
        } = args.command
        else {
            panic!("expected page command");
        };

        assert_eq!(page, 0);
        assert_eq!(size, 3);
        assert_eq!(strategy, PageStrategy::Complex);
        assert_eq!(
            filter.condition(),
            MemberSearchCondition::default()
                .with_team_name("teamB")
                .with_age_goe(35)
        );
    }

    #[test]
    fn test_sort_and_join_options() {
        let args = Args::parse_from(["roster", "search", "--inner", "--sort", "-age,username"]);

        let Command::Search { filter } = args.command else {
            panic!("expected search command");
        };

        let options = filter.options().unwrap();
        assert_eq!(options.join, JoinStrategy::Inner);
        assert_eq!(options.sort.len(), 2);
        assert_eq!(options.sort[0].field, SortField::Age);
        assert_eq!(options.sort[0].direction, SortDirection::Desc);
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let args = Args::parse_from(["roster", "search", "--sort", "height"]);

        let Command::Search { filter } = args.command else {
            panic!("expected search command");
        };

        assert!(filter.options().is_err());
    }
}
