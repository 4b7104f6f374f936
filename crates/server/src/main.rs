use database::db::create_connection;
use env_logger::Env;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use server::{build_router, config::AppConfig, state::AppState, utils::shutdown::shutdown_signal};
use std::{error::Error, net::SocketAddr, process};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        error!("Server error: {e}");
        process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let db = create_connection(&config.database_url).await?;
    info!("Database connected successfully");

    Migrator::up(&db, None).await?;
    info!("Database migrations applied");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let environment = config.environment.clone();
    let app = build_router(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on port {}", addr.port());
    info!("Environment: {environment}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database connection closed");

    Ok(())
}
