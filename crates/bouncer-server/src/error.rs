use std::net::SocketAddr;

/// Failures that stop the server from starting or keep it from serving.
#[derive(Debug)]
pub enum ServerError {
    /// The configuration is unusable.
    Config(String),
    /// `host`/`port` do not form a socket address.
    InvalidAddr(String),
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    Serve(std::io::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(m) => write!(f, "invalid configuration: {m}"),
            Self::InvalidAddr(m) => write!(f, "invalid listen address: {m}"),
            Self::Bind { addr, source } => write!(f, "failed to bind to {addr}: {source}"),
            Self::Serve(e) => write!(f, "server error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind { source, .. } => Some(source),
            Self::Serve(e) => Some(e),
            Self::Config(_) | Self::InvalidAddr(_) => None,
        }
    }
}
