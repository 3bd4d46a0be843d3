use concierge::agent::Agent;
use std::sync::Arc;

/// Shared application state: the agent and greeting are built once at
/// startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Agent>,
    pub greeting: String,
}
