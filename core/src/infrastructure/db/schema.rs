use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};
use tracing::debug;

use crate::entity::{members, teams};

/// Creates the roster tables if they do not exist yet. `teams` goes first since
/// `members` references it.
pub async fn create_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    create_table(db, teams::Entity).await?;
    create_table(db, members::Entity).await?;

    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    debug!(table = entity.table_name(), "creating table");

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;

    Ok(())
}
