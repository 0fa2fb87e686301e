//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod submissions;
pub mod validation;

pub use error::{ApiResult, json_config};
