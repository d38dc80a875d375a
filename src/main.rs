use citadel::server::{
    config::Config, model::app::AppState, router, scheduler::Scheduler,
    service::character::CharacterService, startup, util::timing,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = startup::build_remote_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_to_cache(&config).await?;

    let character_service = CharacterService::new(&db, &client, &cache);
    if let Err(e) = timing::measure(
        "initial character seed",
        character_service.populate_initial_characters(),
    )
    .await
    {
        tracing::error!("Initial character seed failed, continuing with current store: {}", e);
    }

    Scheduler::new(db.clone(), client.clone())
        .await?
        .start()
        .await?;

    let app = router::routes().with_state(AppState { db, client, cache });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
