use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SavePortfolioError, SavePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStorage;
use crate::modules::portfolio::domain::Portfolio;

pub struct SavePortfolioService<S>
where
    S: PortfolioStorage,
{
    collection: Arc<PortfolioCollection<S>>,
}

impl<S> SavePortfolioService<S>
where
    S: PortfolioStorage,
{
    pub fn new(collection: Arc<PortfolioCollection<S>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl<S> SavePortfolioUseCase for SavePortfolioService<S>
where
    S: PortfolioStorage,
{
    async fn execute(&self, portfolio: Portfolio) -> Result<Portfolio, SavePortfolioError> {
        let saved = self
            .collection
            .save(portfolio)
            .await
            .map_err(|e| SavePortfolioError::RepositoryError(e.to_string()))?;

        info!(portfolio_id = %saved.id, "Portfolio saved");
        Ok(saved)
    }
}
