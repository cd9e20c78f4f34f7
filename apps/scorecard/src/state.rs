use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: the scoring core keeps no state between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
