pub mod app;
pub mod config;
pub mod domain;
pub mod evaluation;
pub mod export;
pub mod network;

pub use domain::error::{NetworkError, Result};
pub use domain::types::NetworkConfig;
pub use network::create_network;
