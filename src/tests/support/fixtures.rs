use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::modules::portfolio::adapter::outgoing::{
    KeyValuePortfolioStorage, KeyValuePreviewStore, MemoryKeyValueStore,
};
use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::domain::{
    PersonalInfo, Portfolio, PortfolioFormData, Project, TemplateKind,
};
use crate::modules::wizard::application::registry::DEFAULT_IDLE_MINUTES;
use crate::{build_app_state, AppState};

pub type MemoryCollection = PortfolioCollection<KeyValuePortfolioStorage<MemoryKeyValueStore>>;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

/// A record that passes validation, stamped with a fixed time so copies
/// compare equal.
pub fn sample_portfolio(id: &str, name: &str) -> Portfolio {
    let data = PortfolioFormData {
        personal_info: PersonalInfo {
            name: name.to_string(),
            title: "Software Engineer".to_string(),
            email: "someone@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Lisbon".to_string(),
        },
        bio: format!("{} builds reliable web services.", name),
        projects: vec![Project {
            id: format!("{}-project", id),
            title: "Inventory API".to_string(),
            description: "Stock tracking for small shops".to_string(),
            technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            live_url: Some(String::new()),
            github_url: Some("https://github.com/example/inventory".to_string()),
        }],
        template: TemplateKind::Modern,
        ..PortfolioFormData::default()
    };

    Portfolio::from_form(id.to_string(), data, fixed_time(), fixed_time())
}

pub async fn loaded_memory_collection(portfolios: Vec<Portfolio>) -> Arc<MemoryCollection> {
    let collection = Arc::new(PortfolioCollection::new(KeyValuePortfolioStorage::new(
        MemoryKeyValueStore::new(),
    )));
    collection.load().await;

    for portfolio in portfolios {
        collection
            .save(portfolio)
            .await
            .expect("memory store accepts writes");
    }

    collection
}

/// Full application state over in-memory stores.
pub async fn memory_app_state(portfolios: Vec<Portfolio>) -> web::Data<AppState> {
    let collection = loaded_memory_collection(portfolios).await;
    let preview_store = Arc::new(KeyValuePreviewStore::new(MemoryKeyValueStore::new()));

    web::Data::new(build_app_state(
        collection,
        preview_store,
        Duration::minutes(DEFAULT_IDLE_MINUTES),
    ))
}
