use mapathon_site::config::SiteConfig;
use mapathon_site::{AppState, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = SiteConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    let state = AppState::from_config(config)?;
    info!(
        "Loaded {} routes, content from {:?}",
        state.routes.len(),
        state.config.content_source
    );

    // the search index fills in the background, pages are served meanwhile
    state.spawn_search_index_build();

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
