use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use bouncer_server::build_app;
use bouncer_server::config::ServerConfig;

/// Workspace `web/` directory holding the real page assets.
pub fn web_root() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../web").to_string()
}

/// An in-process asset server on an ephemeral loopback port. The listener is
/// bound before `spawn` returns, so requests can be sent right away; the
/// serving task is aborted on drop.
pub struct AssetServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl AssetServer {
    /// Serve the workspace's `web/` directory with default settings.
    pub async fn over_web_root() -> Self {
        Self::spawn(ServerConfig {
            web_root: web_root(),
            ..ServerConfig::default()
        })
        .await
    }

    /// Serve a web root that does not exist.
    pub async fn without_assets() -> Self {
        Self::spawn(ServerConfig {
            web_root: "/definitely/not/a/real/web/root".to_string(),
            ..ServerConfig::default()
        })
        .await
    }

    pub async fn spawn(config: ServerConfig) -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("listener address");
        let app = build_app(config);
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("asset server failed");
        });
        Self { addr, task }
    }

    pub fn root_url(&self) -> String {
        self.url("/")
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for AssetServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
