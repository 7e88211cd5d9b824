use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shiptrader::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    router, startup,
    service::import::StarshipImportService,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Starship catalog and sale listing service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run migrations and serve the HTTP API (the default)
    Serve,
    /// Import the starship catalog from a paginated remote feed
    ImportStarships {
        /// First page of the feed, falls back to STARSHIP_FEED_URL
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::ImportStarships { endpoint } => import_starships(config, endpoint).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let app = router::router(AppState::from(db));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn import_starships(config: Config, endpoint: Option<String>) -> Result<(), Error> {
    let endpoint = endpoint
        .or_else(|| config.starship_feed_url.clone())
        .ok_or(ConfigError::MissingFeedEndpoint)?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::build_http_client(&config)?;

    let import_service = StarshipImportService::new(&db, &http_client);
    let summary = import_service.import_starships(&endpoint).await?;

    tracing::info!(
        "Imported {} pages from {} ({} new, {} existing)",
        summary.pages,
        endpoint,
        summary.created,
        summary.existing
    );
    println!("Inserted {} records", summary.count);

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
