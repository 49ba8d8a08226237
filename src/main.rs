use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reelcraft::config::settings::AppConfig;
use reelcraft::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reelcraft=info,tower_http=info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new();
    config.ensure_dirs()?;
    let port = config.server_port;

    let app = reelcraft::app::create_app(AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
