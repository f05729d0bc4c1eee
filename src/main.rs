use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cinefront::cache::InMemoryCache;
use cinefront::config::Config;
use cinefront::movies::{MovieEndpoint, OmdbClient};
use cinefront::router::Router;
use cinefront::server::Server;
use cinefront::statics::StaticFiles;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!(
        bind = %config.bind_addr,
        public_dir = %config.public_dir,
        "starting cinefront"
    );

    let endpoint = MovieEndpoint::new(
        InMemoryCache::new(),
        OmdbClient::new(&config.omdb_url, &config.omdb_key),
    );
    let router = Arc::new(Router::new(endpoint, StaticFiles::new(&config.public_dir)));

    let server = Server::bind(&config.bind_addr).await?;
    server.run(router).await?;
    Ok(())
}
