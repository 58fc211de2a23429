use std::sync::Arc;

use auth::Authenticator;
use game_service::config::Config;
use game_service::domain::leaderboard::service::LeaderboardService;
use game_service::domain::user::service::UserService;
use game_service::inbound::http::router::create_router;
use game_service::outbound::repositories::InMemoryStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "game_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "game-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    if config.jwt.secret.trim().is_empty() {
        anyhow::bail!("jwt.secret must be set (JWT__SECRET environment variable)");
    }

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        seed_demo_data = config.store.seed_demo_data,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let store = Arc::new(InMemoryStore::new());

    if config.store.seed_demo_data {
        store.seed_demo_data(&auth::PasswordHasher::new()).await?;
        tracing::info!("Demo players and score history seeded");
    }

    let user_service = Arc::new(UserService::new(Arc::clone(&store)));
    let leaderboard_service = Arc::new(LeaderboardService::new(
        Arc::clone(&store),
        Arc::clone(&store),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        leaderboard_service,
        authenticator,
        config.jwt.expiration_hours,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
