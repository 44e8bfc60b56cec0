use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::collection::PortfolioCollection;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioStorage;
use crate::modules::portfolio::domain::Portfolio;

pub struct GetPortfolioService<S>
where
    S: PortfolioStorage,
{
    collection: Arc<PortfolioCollection<S>>,
}

impl<S> GetPortfolioService<S>
where
    S: PortfolioStorage,
{
    pub fn new(collection: Arc<PortfolioCollection<S>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl<S> GetPortfolioUseCase for GetPortfolioService<S>
where
    S: PortfolioStorage,
{
    async fn execute(&self, id: &str) -> Result<Portfolio, GetPortfolioError> {
        self.collection
            .get(id)
            .await
            .ok_or(GetPortfolioError::NotFound)
    }
}
