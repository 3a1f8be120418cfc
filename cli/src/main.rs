use anyhow::bail;
use clap::Parser;
use roster_core::{
    application::{create_service, seed_fixture},
    domain::{
        search::{
            ports::MemberSearchService,
            value_objects::{
                CountStrategy, MemberTeamDto, OffsetLimit, Paginated, SearchOptions,
            },
        },
        team::ports::TeamService,
    },
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command, PageStrategy};

mod args;

#[derive(Debug, Serialize)]
struct PageView {
    #[serde(flatten)]
    page: Paginated<MemberTeamDto>,
    total_pages: i64,
    has_next: bool,
}

impl From<Paginated<MemberTeamDto>> for PageView {
    fn from(page: Paginated<MemberTeamDto>) -> Self {
        Self {
            total_pages: page.total_pages(),
            has_next: page.has_next(),
            page,
        }
    }
}

fn init_logger(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(args.log.json);

    let service = create_service((&args.db).into()).await?;

    match args.command {
        Command::Init => {
            info!("schema is ready");
        }
        Command::Seed => {
            seed_fixture(&service).await?;
        }
        Command::Search { filter } => {
            let rows = service
                .search_with(filter.condition(), filter.options()?)
                .await?;
            print_json(&rows)?;
        }
        Command::Page {
            filter,
            page,
            size,
            strategy,
        } => {
            let condition = filter.condition();
            let options = filter.options()?;
            let page = OffsetLimit::of_page(page, size)?;

            let result = match strategy {
                PageStrategy::Simple => {
                    if options != SearchOptions::default() {
                        bail!("--inner and --sort are not available with the simple strategy");
                    }
                    service.search_page_simple(condition, page).await?
                }
                PageStrategy::Complex => {
                    service
                        .search_page(condition, page, options, CountStrategy::Always)
                        .await?
                }
                PageStrategy::Optimized => {
                    service
                        .search_page(condition, page, options, CountStrategy::WhenNeeded)
                        .await?
                }
            };

            print_json(&PageView::from(result))?;
        }
        Command::TeamStats => {
            let stats = service.get_team_age_stats().await?;
            print_json(&stats)?;
        }
    }

    Ok(())
}
