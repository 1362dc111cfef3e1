//! Web layer for the wind restriction authority service.
//!
//! Exposes rule evaluation over HTTP so the dispatch system can submit a
//! train snapshot and receive the verdict and, when granted, the issued
//! authority.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
