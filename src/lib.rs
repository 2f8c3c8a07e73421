pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod rest;
pub mod utils;

pub use crate::core::page::PageObserver;
pub use config::{GatewayConfig, SmtpConfig};
pub use rest::{build_router, AppState};
pub use utils::error::{RelayError, Result};
