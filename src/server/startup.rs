use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensure the report storage directory exists before the first upload
pub async fn prepare_report_storage(config: &Config) -> Result<(), Error> {
    tokio::fs::create_dir_all(&config.report_storage_dir)
        .await
        .map_err(crate::server::error::report::ReportError::Io)?;

    Ok(())
}
