pub mod action;
pub mod config;
pub mod error;
pub mod issuer;
pub mod order;
pub mod request;
pub mod worker;

pub use error::{ClientError, Result};
