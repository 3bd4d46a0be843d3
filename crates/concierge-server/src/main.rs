mod configuration;
mod error;
mod routes;
mod state;

use anyhow::Result;
use concierge::agent::Agent;
use concierge::profile::Profile;
use concierge::prompt::build_system_prompt;
use concierge::providers::configs::ProviderRegistry;
use concierge::providers::factory;
use concierge::tools::notify::Notifier;
use concierge::tools::Toolbox;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::configuration::Settings;
use crate::routes::greeting::welcome_message;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Configuration errors abort startup with a clear message
    let settings = Settings::new()?;

    let profile = Profile::load(&settings.profile.data_dir, &settings.profile.name)?;
    let system_prompt = build_system_prompt(&profile)?;

    let registry = ProviderRegistry::from_env();
    let config = registry.resolve(&settings.provider)?;
    info!(provider = %config.name, model = %config.model, "provider resolved");

    let provider = factory::get_provider(config)?;
    let toolbox = Toolbox::new(Notifier::from_env());
    let agent = Agent::new(provider, toolbox, system_prompt);

    let state = AppState {
        agent: Arc::new(agent),
        greeting: welcome_message(&profile.name),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(settings.server.socket_addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
