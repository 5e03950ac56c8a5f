use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ORDERS_DIR: &str = "./orders";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub catalog_id: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub name: String,
    pub address: String,
    pub items: Vec<Item>,
}

impl Order {
    /// The order sent to the slow endpoint in error mode.
    pub fn bad() -> Order {
        Order {
            name: "error".to_string(),
            address: "badhood".to_string(),
            items: vec![Item {
                catalog_id: 5,
                amount: 1,
            }],
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(ClientError::Encode)
    }
}

/// Reads the first file of `dir` (by file name) as a single order.
pub fn read_first_order<P: AsRef<Path>>(dir: P) -> Result<Order> {
    let dir = dir.as_ref();
    let first = list_order_files(dir)?
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::NoOrders {
            dir: dir.to_path_buf(),
        })?;
    parse_order_file(&first)
}

/// Reads every file of `dir`, skipping the ones that are not valid orders.
pub fn read_all_orders<P: AsRef<Path>>(dir: P) -> Result<Vec<Order>> {
    let dir = dir.as_ref();
    let mut orders = Vec::new();
    for path in list_order_files(dir)? {
        match parse_order_file(&path) {
            Ok(order) => orders.push(order),
            Err(e) => log::warn!("skipping {}: {}", path.display(), e),
        }
    }
    if orders.is_empty() {
        return Err(ClientError::NoOrders {
            dir: dir.to_path_buf(),
        });
    }
    Ok(orders)
}

fn list_order_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source: std::io::Error| ClientError::OrdersRead {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn parse_order_file(path: &Path) -> Result<Order> {
    let raw = fs::read(path).map_err(|source| ClientError::OrdersRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| ClientError::OrderParse {
        path: path.to_path_buf(),
        source,
    })
}
