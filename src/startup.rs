use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{ownership::OwnershipRepository, toof_pic::ToofPicRepository},
    error::AppError,
    model::rarity::Rarity,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the catalog and ledger tables
/// exist before the bot handles its first command.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Logs how many pics of each rarity the catalog holds and the size of the ledger.
pub async fn log_catalog(db: &DatabaseConnection) -> Result<(), AppError> {
    let catalog = ToofPicRepository::new(db);

    let mut tiers = Vec::new();
    for &rarity in Rarity::list() {
        let count = catalog.count_by_rarity(rarity).await?;
        tiers.push(format!("{} {}", count, rarity));
    }

    let records = OwnershipRepository::new(db).count().await?;

    tracing::info!(
        "Catalog has {} pics; ledger has {} records",
        tiers.join(", "),
        records
    );

    Ok(())
}
