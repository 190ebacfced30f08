use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::auth::adapter::outgoing::FileSessionStore;
use portfolio_client::auth::application::AuthContext;
use portfolio_client::config::ClientConfig;
use portfolio_client::multimedia::application::ImageUrlResolver;
use portfolio_client::profile::adapter::outgoing::ProfileApiHttp;
use portfolio_client::profile::application::HomePage;
use portfolio_client::project::adapter::outgoing::ProjectApiHttp;
use portfolio_client::project::application::ProjectsPage;
use portfolio_client::shared::api::ApiHttpClient;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    info!("Using backend at {}", config.api_url);

    let store = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let auth = AuthContext::restore(store, config.admin_password.clone());
    info!("Admin mode: {}", auth.is_logged_in());

    let http = ApiHttpClient::new(config.api_url.clone());
    let images = ImageUrlResolver::new(config.api_url.clone());

    let mut home = HomePage::new(ProfileApiHttp::new(http.clone()));
    home.load().await;
    let view = home.view(&auth, &images);
    if let Some(banner) = &view.banner {
        warn!("{}", banner.message());
    }
    info!("{} - {}", view.name, view.title);
    info!("Profile image: {}", view.image_url);
    for group in &view.skill_groups {
        let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
        info!("{}: {}", group.category, names.join(", "));
    }

    let mut projects = ProjectsPage::new(ProjectApiHttp::new(http));
    projects.load().await;
    if let Some(message) = projects.status().error() {
        warn!("{}", message);
    }
    for card in projects.cards(&images) {
        info!(
            "[{}] {} ({}) {}",
            card.href.as_deref().unwrap_or("-"),
            card.title,
            card.period,
            card.image_url
        );
    }

    Ok(())
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting portfolio client: {e:#}");
    }
}
