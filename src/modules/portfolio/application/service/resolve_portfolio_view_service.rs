use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PortfolioView, ResolvePortfolioViewError, ResolvePortfolioViewUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{PortfolioStorage, PreviewStore};
use crate::modules::portfolio::domain::{Portfolio, PREVIEW_PORTFOLIO_ID};

pub struct ResolvePortfolioViewService<S>
where
    S: PortfolioStorage,
{
    collection: Arc<PortfolioCollection<S>>,
    preview_store: Arc<dyn PreviewStore>,
}

impl<S> ResolvePortfolioViewService<S>
where
    S: PortfolioStorage,
{
    pub fn new(collection: Arc<PortfolioCollection<S>>, preview_store: Arc<dyn PreviewStore>) -> Self {
        Self {
            collection,
            preview_store,
        }
    }

    /// The slot only counts when it holds a record with a name.
    fn read_preview(&self) -> Option<Portfolio> {
        match self.preview_store.load_preview() {
            Ok(Some(portfolio)) if !portfolio.personal_info.name.is_empty() => Some(portfolio),
            Ok(Some(_)) => {
                warn!("Preview slot holds a record without a name");
                None
            }
            Ok(None) => None,
            Err(e) => {
                error!("Error parsing preview portfolio data: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl<S> ResolvePortfolioViewUseCase for ResolvePortfolioViewService<S>
where
    S: PortfolioStorage,
{
    async fn execute(&self, id: &str) -> Result<PortfolioView, ResolvePortfolioViewError> {
        let (portfolio, is_preview) = if id == PREVIEW_PORTFOLIO_ID {
            (self.read_preview(), true)
        } else {
            (self.collection.get(id).await, false)
        };

        portfolio
            .map(|portfolio| PortfolioView {
                portfolio,
                is_preview,
            })
            .ok_or(ResolvePortfolioViewError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::adapter::outgoing::{KeyValuePreviewStore, MemoryKeyValueStore};
    use crate::modules::portfolio::application::ports::outgoing::{
        KeyValueStore, PREVIEW_STORAGE_KEY,
    };
    use crate::tests::support::fixtures::{loaded_memory_collection, sample_portfolio};

    async fn service_with(
        stored: Vec<Portfolio>,
        session: MemoryKeyValueStore,
    ) -> ResolvePortfolioViewService<
        crate::modules::portfolio::adapter::outgoing::KeyValuePortfolioStorage<MemoryKeyValueStore>,
    > {
        ResolvePortfolioViewService::new(
            loaded_memory_collection(stored).await,
            Arc::new(KeyValuePreviewStore::new(session)),
        )
    }

    #[tokio::test]
    async fn test_resolves_stored_portfolio() {
        let service =
            service_with(vec![sample_portfolio("p-1", "Ann")], MemoryKeyValueStore::new()).await;

        let view = service.execute("p-1").await.unwrap();

        assert!(!view.is_preview);
        assert_eq!(view.portfolio.id, "p-1");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = service_with(vec![], MemoryKeyValueStore::new()).await;

        assert_eq!(
            service.execute("p-1").await.unwrap_err(),
            ResolvePortfolioViewError::NotFound
        );
    }

    #[tokio::test]
    async fn test_preview_id_reads_session_slot() {
        let session = MemoryKeyValueStore::new();
        KeyValuePreviewStore::new(session.clone())
            .store_preview(&sample_portfolio(PREVIEW_PORTFOLIO_ID, "Draft Dana"))
            .unwrap();
        let service = service_with(vec![], session).await;

        let view = service.execute(PREVIEW_PORTFOLIO_ID).await.unwrap();

        assert!(view.is_preview);
        assert_eq!(view.portfolio.personal_info.name, "Draft Dana");
    }

    #[tokio::test]
    async fn test_preview_does_not_fall_back_to_collection() {
        let service = service_with(
            vec![sample_portfolio(PREVIEW_PORTFOLIO_ID, "Stored")],
            MemoryKeyValueStore::new(),
        )
        .await;

        assert!(service.execute(PREVIEW_PORTFOLIO_ID).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_preview_is_not_found() {
        let session = MemoryKeyValueStore::new();
        session.set_item(PREVIEW_STORAGE_KEY, "{{{").unwrap();
        let service = service_with(vec![], session).await;

        assert!(service.execute(PREVIEW_PORTFOLIO_ID).await.is_err());
    }

    #[tokio::test]
    async fn test_nameless_preview_is_not_found() {
        let session = MemoryKeyValueStore::new();
        KeyValuePreviewStore::new(session.clone())
            .store_preview(&sample_portfolio(PREVIEW_PORTFOLIO_ID, ""))
            .unwrap();
        let service = service_with(vec![], session).await;

        assert!(service.execute(PREVIEW_PORTFOLIO_ID).await.is_err());
    }
}
