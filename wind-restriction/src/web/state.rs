//! Application state for the web layer.

use std::sync::Arc;

use crate::authority::AuthorityBuilder;
use crate::config::ServerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Issues authorities; its sequences are shared by all requests.
    pub authorities: Arc<AuthorityBuilder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(authorities: AuthorityBuilder) -> Self {
        Self {
            authorities: Arc::new(authorities),
        }
    }

    /// Create app state with sequences seeded from `config`.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(AuthorityBuilder::starting_at(
            config.advisory_seq_start,
            config.authority_seq_start,
        ))
    }
}
