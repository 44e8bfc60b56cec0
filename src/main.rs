pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::portfolio::adapter::outgoing::{
    FileKeyValueStore, KeyValuePortfolioStorage, KeyValuePreviewStore, MemoryKeyValueStore,
};
use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, SavePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{PortfolioStorage, PreviewStore};
use crate::modules::portfolio::application::service::{
    DeletePortfolioService, GetPortfolioService, ListPortfoliosService,
    ResolvePortfolioViewService, SavePortfolioService,
};
use crate::modules::wizard::application::registry::WizardRegistry;
use crate::modules::wizard::application::service::{
    ApplyWizardActionService, DiscardWizardService, GetWizardService, OpenWizardService,
    PreviewWizardService, SaveWizardService,
};
use crate::modules::wizard::application::wizard_use_cases::WizardUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub wizard: WizardUseCases,
}

/// Wires every use case over one collection and one preview slot.
pub fn build_app_state<S>(
    collection: Arc<PortfolioCollection<S>>,
    preview_store: Arc<dyn PreviewStore>,
    wizard_idle_ttl: chrono::Duration,
) -> AppState
where
    S: PortfolioStorage + 'static,
{
    let get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync> =
        Arc::new(GetPortfolioService::new(Arc::clone(&collection)));
    let save_portfolio: Arc<dyn SavePortfolioUseCase + Send + Sync> =
        Arc::new(SavePortfolioService::new(Arc::clone(&collection)));

    let portfolio = PortfolioUseCases {
        list: Arc::new(ListPortfoliosService::new(Arc::clone(&collection))),
        get_single: Arc::clone(&get_portfolio),
        save: Arc::clone(&save_portfolio),
        delete: Arc::new(DeletePortfolioService::new(Arc::clone(&collection))),
        resolve_view: Arc::new(ResolvePortfolioViewService::new(
            collection,
            Arc::clone(&preview_store),
        )),
    };

    let registry = Arc::new(WizardRegistry::with_idle_ttl(wizard_idle_ttl));
    let wizard = WizardUseCases {
        open: Arc::new(OpenWizardService::new(Arc::clone(&registry), get_portfolio)),
        get: Arc::new(GetWizardService::new(Arc::clone(&registry))),
        apply_action: Arc::new(ApplyWizardActionService::new(Arc::clone(&registry))),
        save: Arc::new(SaveWizardService::new(Arc::clone(&registry), save_portfolio)),
        preview: Arc::new(PreviewWizardService::new(
            Arc::clone(&registry),
            preview_store,
        )),
        discard: Arc::new(DiscardWizardService::new(registry)),
    };

    AppState { portfolio, wizard }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Collection lives on disk; the preview slot lives as long as the process
    let file_store = FileKeyValueStore::open(&config.data_dir).map_err(io::Error::other)?;
    info!(data_dir = %file_store.root().display(), key = %config.storage_key, "Using file storage");

    let collection = Arc::new(PortfolioCollection::new(KeyValuePortfolioStorage::with_key(
        file_store.clone(),
        config.storage_key.clone(),
    )));
    collection.load().await;

    let preview_store: Arc<dyn PreviewStore> =
        Arc::new(KeyValuePreviewStore::new(MemoryKeyValueStore::new()));

    let state = build_app_state(
        collection,
        preview_store,
        chrono::Duration::minutes(config.wizard_idle_minutes),
    );
    let file_store = web::Data::new(file_store);
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(file_store.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::portfolio::adapter::incoming::web::routes as portfolio_routes;
    use crate::modules::wizard::adapter::incoming::web::routes as wizard_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolios
    cfg.service(portfolio_routes::validate_portfolio_handler);
    cfg.service(portfolio_routes::get_portfolios_handler);
    cfg.service(portfolio_routes::get_portfolio_by_id_handler);
    cfg.service(portfolio_routes::delete_portfolio_handler);
    // Wizards
    cfg.service(wizard_routes::open_wizard_handler);
    cfg.service(wizard_routes::get_wizard_handler);
    cfg.service(wizard_routes::apply_wizard_action_handler);
    cfg.service(wizard_routes::save_wizard_handler);
    cfg.service(wizard_routes::preview_wizard_handler);
    cfg.service(wizard_routes::discard_wizard_handler);
    // Pages
    cfg.service(portfolio_routes::view_portfolio_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
