use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStorage;

pub struct DeletePortfolioService<S>
where
    S: PortfolioStorage,
{
    collection: Arc<PortfolioCollection<S>>,
}

impl<S> DeletePortfolioService<S>
where
    S: PortfolioStorage,
{
    pub fn new(collection: Arc<PortfolioCollection<S>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl<S> DeletePortfolioUseCase for DeletePortfolioService<S>
where
    S: PortfolioStorage,
{
    async fn execute(&self, id: &str) -> Result<(), DeletePortfolioError> {
        self.collection
            .delete(id)
            .await
            .map_err(|e| DeletePortfolioError::RepositoryError(e.to_string()))?;

        info!(portfolio_id = %id, "Portfolio deleted");
        Ok(())
    }
}
