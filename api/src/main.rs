use anyhow::Context;
use api::{AppState, app, config::Config, db};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("api=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();

    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let state = AppState::new(
        pool,
        config.bcrypt_cost,
        config.cookie_secure,
        config.session_ttl_seconds,
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("Server running on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  POST   /signup           - Create account");
    info!("  POST   /login            - Login (sets session cookie)");
    info!("  GET    /logout           - Logout (auth)");
    info!("  GET    /posts            - List posts (auth)");
    info!("  GET    /post/{{id}}        - Get specific post");
    info!("  POST   /create           - Create post (auth)");
    info!("  GET    /{{id}}/update      - Load post for editing (auth)");
    info!("  POST   /{{id}}/update      - Update post (auth)");
    info!("  DELETE /{{id}}/delete      - Delete post (auth)");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
