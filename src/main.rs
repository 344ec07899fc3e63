use billhours::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("billhours=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let jobs = startup::start_workers(&config, db.clone()).await.unwrap();

    let routes = router::routes().with_state(AppState { db, jobs });

    tracing::info!("Starting server on {}", config.address);

    let listener = tokio::net::TcpListener::bind(&config.address).await.unwrap();
    axum::serve(listener, routes).await.unwrap();
}
