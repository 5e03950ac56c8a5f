use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Displays as the full help text.
    #[error("{}", crate::action::HELP)]
    Usage,
    #[error("unable to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to read orders from '{}': {source}", .path.display())]
    OrdersRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No files found in {}", .dir.display())]
    NoOrders { dir: PathBuf },
    #[error("invalid order '{}': {source}", .path.display())]
    OrderParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode order: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unable to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unable to read response from {url}: {source}")]
    ResponseRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ClientError::ConfigRead { .. } | ClientError::ConfigParse { .. }
        )
    }

    pub fn is_orders(&self) -> bool {
        matches!(
            self,
            ClientError::OrdersRead { .. }
                | ClientError::NoOrders { .. }
                | ClientError::OrderParse { .. }
        )
    }
}
