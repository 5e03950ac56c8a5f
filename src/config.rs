use crate::error::{ClientError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Target service location, read once from `config.json`.
///
/// ```
/// let conn: storeclient::config::Connection =
///     serde_json::from_str(r#"{"url":"localhost","port":8080}"#).unwrap();
/// assert_eq!(conn.endpoint("/order"), "http://localhost:8080/order");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection {
    pub url: String,
    pub port: u16,
}

impl Connection {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Connection> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| ClientError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let connection: Connection =
            serde_json::from_slice(&raw).map_err(|source| ClientError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded config from {}: {:?}", path.display(), connection);
        Ok(connection)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.url, self.port, path)
    }
}
