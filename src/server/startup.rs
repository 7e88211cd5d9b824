use crate::server::{config::Config, error::Error};

/// Build the HTTP client used by the starship import job
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(crate::server::error::import::ImportError::from)?;

    Ok(client)
}

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
