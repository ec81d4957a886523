use tracing_subscriber::EnvFilter;

use bouncer_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Housley Bouncer server starting");

    if let Err(e) = bouncer_server::serve(ServerConfig::load()).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
